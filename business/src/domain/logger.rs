/// Logging port for the application layer.
/// Implemented by the tracing adapter in the infrastructure layer.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
