pub const FILTER_DATA_ENDPOINT: &str = "/filterData";
pub const CREATE_USER_ENDPOINT: &str = "/createUser";
pub const VALID_USER_ENDPOINT: &str = "/validUser";
pub const RUN_CRON_JOB_ENDPOINT: &str = "/runCronJob";
