//! Service registry port for validating service API keys

/// Port for service registry operations
/// 
/// This trait defines the interface for validating service API keys
/// and retrieving service information. Implementations may use
/// in-memory storage, databases, or external service registries.
pub trait ServiceRegistry: Send + Sync {
    /// Validate an API key and return the service name if valid
    /// 
    /// # Arguments
    /// * `api_key` - The API key to validate
    /// 
    /// # Returns
    /// * `Some(String)` - The service name if the key is valid
    /// * `None` - If the key is invalid or not found
    fn validate_api_key(&self, api_key: &str) -> Option<String>;
    
    /// Check if a service is active and allowed to make requests
    /// 
    /// # Arguments
    /// * `service_name` - The name of the service to check
    /// 
    /// # Returns
    /// * `true` - If the service is active
    /// * `false` - If the service is inactive or not found
    fn is_service_active(&self, service_name: &str) -> bool;
}
