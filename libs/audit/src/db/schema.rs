// aws-secrets-detection-table, partition key messageId, sort key AWSsecretId
pub const MESSAGE_ID: &str = "messageId";
pub const AWS_SECRET_ID: &str = "AWSsecretId";
pub const REFERENCE_ID: &str = "referenceId";
pub const EVENT_NAME: &str = "eventName";
pub const SOURCE_APP: &str = "sourceApp";
pub const EVENT_TIMESTAMP: &str = "eventTimeStamp";
