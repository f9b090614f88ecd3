//! Fetching of the static data files
//!
//! All three requests are started before any of them is awaited, then joined
//! with `Promise.all`. The first failure aborts the whole load.

use contracts::shared::config::SourcesConfig;
use contracts::shared::error::LoadError;
use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, RequestInit, RequestMode, Response};

/// Raw bodies of the three source files
#[derive(Debug, Clone)]
pub struct SourceTexts {
    pub departments: String,
    pub municipalities: String,
    pub facilities: String,
}

pub async fn fetch_sources(sources: &SourcesConfig) -> Result<SourceTexts, LoadError> {
    let urls = [
        sources.departments_url.as_str(),
        sources.municipalities_url.as_str(),
        sources.facilities_url.as_str(),
    ];

    let requests = Array::new();
    for url in urls {
        let promise = start_fetch(url)?;
        requests.push(&promise);
    }

    let responses = JsFuture::from(Promise::all(&requests))
        .await
        .map_err(|e| LoadError::Fetch {
            url: urls.join(", "),
            message: format!("{:?}", e),
        })?;
    let responses: Array = responses.unchecked_into();

    let mut bodies = Vec::with_capacity(urls.len());
    for (i, url) in urls.iter().enumerate() {
        bodies.push(read_text(url, responses.get(i as u32)).await?);
    }

    let [departments, municipalities, facilities]: [String; 3] =
        bodies.try_into().map_err(|_| LoadError::Fetch {
            url: urls.join(", "),
            message: "Unexpected number of responses".to_string(),
        })?;

    Ok(SourceTexts {
        departments,
        municipalities,
        facilities,
    })
}

fn start_fetch(url: &str) -> Result<Promise, LoadError> {
    let window = window().ok_or_else(|| LoadError::Fetch {
        url: url.to_string(),
        message: "No window object".to_string(),
    })?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = web_sys::Request::new_with_str_and_init(url, &opts).map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        message: format!("Failed to create request: {:?}", e),
    })?;

    Ok(window.fetch_with_request(&request))
}

async fn read_text(url: &str, value: JsValue) -> Result<String, LoadError> {
    let response: Response = value.dyn_into().map_err(|_| LoadError::Fetch {
        url: url.to_string(),
        message: "Not a Response".to_string(),
    })?;

    if !response.ok() {
        return Err(LoadError::Http {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let promise = response.text().map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        message: format!("Failed to read body: {:?}", e),
    })?;
    let text = JsFuture::from(promise).await.map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        message: format!("Failed to read body: {:?}", e),
    })?;

    text.as_string().ok_or_else(|| LoadError::Fetch {
        url: url.to_string(),
        message: "Body is not text".to_string(),
    })
}
