//! Page configuration context

use leptos::prelude::*;

use crate::core::config::PageConfig;

/// Provide the page config to the component tree.
///
/// On the server the shell provides it before rendering. In the browser it is
/// read back from the JSON the shell embedded.
pub fn provide_page_config() -> PageConfig {
    let config = use_context::<PageConfig>().unwrap_or_else(embedded_page_config);
    provide_context(config.clone());
    config
}

pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>().unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn embedded_page_config() -> PageConfig {
    use crate::core::config::PAGE_CONFIG_ELEMENT_ID;
    use leptos::logging::warn;

    let json = document()
        .get_element_by_id(PAGE_CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    match json {
        Some(json) => PageConfig::from_json(&json).unwrap_or_else(|e| {
            warn!("{e}; using default page config");
            PageConfig::default()
        }),
        None => {
            warn!("#{PAGE_CONFIG_ELEMENT_ID} not found; using default page config");
            PageConfig::default()
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn embedded_page_config() -> PageConfig {
    PageConfig::default()
}
