pub mod news_provider;
pub mod news_repository;
pub mod newsdata_provider;

pub use news_provider::{NewsApiError, NewsApiResponse, NewsProvider, NewsResult};
pub use news_repository::NewsRepository;
pub use newsdata_provider::NewsDataProvider;
