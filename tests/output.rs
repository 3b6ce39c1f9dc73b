use aws_profile_parser::output::{Output, OutputMode};
use aws_profile_parser::profile::Profile;

fn derived() -> Profile {
    Profile {
        role_arn: "testRoleArn".to_string(),
        role_session_name: "derived".to_string(),
        source_profile: "iam-user".to_string(),
        ..Profile::default()
    }
}

#[test]
fn renders_pretty_json_in_field_order() {
    let rendered = Output::new(OutputMode::Json)
        .render(&derived())
        .expect("json should render");
    assert_eq!(
        rendered,
        "{\n  \"AWS_ROLE_ARN\": \"testRoleArn\",\n  \"AWS_ROLE_SESSION_NAME\": \"derived\",\n  \"AWS_SOURCE_PROFILE\": \"iam-user\"\n}"
    );
}

#[test]
fn renders_env_lines() {
    let rendered = Output::new(OutputMode::Env)
        .render(&derived())
        .expect("env should render");
    assert_eq!(
        rendered,
        "AWS_ROLE_ARN=testRoleArn\nAWS_ROLE_SESSION_NAME=derived\nAWS_SOURCE_PROFILE=iam-user"
    );
}
