use crate::domain::model::LanguageRegistry;
use crate::utils::error::Result;

/// File access relative to the site root.
pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
    fn read_to_string(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn create_dir(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn languages(&self) -> &LanguageRegistry;
    fn tracked_files(&self) -> &[String];
    fn main_page(&self) -> &str;
    fn source_language(&self) -> &str;
}
