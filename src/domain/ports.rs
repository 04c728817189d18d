pub trait ConfigProvider: Send + Sync {
    fn verbose(&self) -> bool;
    fn monitor(&self) -> bool;
    fn log_format(&self) -> &str;
}
