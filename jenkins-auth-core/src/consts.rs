/// Environment variable holding the Jenkins username
pub const ENV_USERNAME: &str = "JENKINS_USERNAME";
/// Environment variable holding the Jenkins API token
pub const ENV_API_TOKEN: &str = "JENKINS_API_TOKEN";
/// Environment variable holding a Jenkins bearer token
pub const ENV_BEARER_TOKEN: &str = "JENKINS_BEARER_TOKEN";

/// File name of the auth store inside the config directory
pub const AUTH_FILE_NAME: &str = "jenkinsAuth.yaml";

/// Mode applied to the auth file when it is written (owner rwx, group rx)
pub const DEFAULT_WRITE_PERMISSIONS: u32 = 0o760;
