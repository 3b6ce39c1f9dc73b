use crate::profile::Profile;

pub fn render(profile: &Profile) -> String {
    profile
        .exported()
        .into_iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
