#[derive(Debug)]
pub enum ApplicationError {
    NotFound,
    BadRequest(String),
    Unauthorized,
    PayloadTooLarge,
    MalformedUrl(String),
    ExternalService(String),
    InternalError(String),
    DatabaseError(String),
}
