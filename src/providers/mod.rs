pub mod keyword;
pub mod router;
pub mod traits;
pub mod types;

pub use keyword::KeywordProvider;
pub use router::ProviderRouter;
pub use traits::AiProvider;
pub use types::ProviderId;
