use std::collections::HashMap;
use std::sync::Arc;

use super::traits::AiProvider;
use super::types::{ProviderError, ProviderId};

pub struct ProviderRouter {
    providers: HashMap<ProviderId, Arc<dyn AiProvider>>,
}

impl ProviderRouter {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    pub fn register(&mut self, provider: Arc<dyn AiProvider>) {
        self.providers.insert(provider.provider_id(), provider);
    }

    pub fn get(&self, provider_id: &ProviderId) -> Result<Arc<dyn AiProvider>, ProviderError> {
        self.providers
            .get(provider_id)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownProvider(provider_id.as_str().to_string()))
    }
}

impl Default for ProviderRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::keyword::{KeywordProvider, ORGAN_REPLY};

    #[tokio::test]
    async fn test_routes_to_registered_provider() {
        let mut router = ProviderRouter::new();
        router.register(Arc::new(KeywordProvider::new()));

        let provider = router.get(&ProviderId::Keyword).unwrap();
        assert_eq!(provider.provider_id(), ProviderId::Keyword);
        assert_eq!(provider.respond("Organ donation eligibility").await, ORGAN_REPLY);
    }

    #[test]
    fn test_unknown_provider_is_an_error() {
        let router = ProviderRouter::new();
        let err = router.get(&ProviderId::Keyword).err().unwrap();
        assert!(matches!(err, ProviderError::UnknownProvider(ref id) if id == "keyword"));
    }
}
