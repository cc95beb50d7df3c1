//! # About Commands
//!
//! Store details for the about view.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::state::StorefrontConfig;

/// Store name and contact lines. Absent contacts are omitted from the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponse {
    pub store_name: String,
    pub contact_email: Option<String>,
    pub instagram: Option<String>,
}

/// Gets the store details from configuration.
pub fn get_about(config: &StorefrontConfig) -> AboutResponse {
    debug!("get_about command");

    AboutResponse {
        store_name: config.store.name.clone(),
        contact_email: config.store.contact_email.clone(),
        instagram: config.store.instagram.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_about() {
        let mut config = StorefrontConfig::default();
        config.store.instagram = Some("@storefront".to_string());

        let about = get_about(&config);
        assert_eq!(about.store_name, "Storefront");
        assert!(about.contact_email.is_none());

        let json = serde_json::to_value(&about).unwrap();
        assert_eq!(json["instagram"], "@storefront");
        assert!(json["contactEmail"].is_null());
    }
}
