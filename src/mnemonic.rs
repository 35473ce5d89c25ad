//! Remote mnemonic provider with a deterministic local fallback.
//!
//! The fetch is fire-and-forget: a worker thread posts the fact to the
//! configured text-generation endpoint and hands the result back over a
//! channel the app polls each frame. Nothing in the quiz ever waits on it;
//! any failure quietly keeps the fallback card on screen.

use crate::model::{Fact, Mnemonic};
use serde::Serialize;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// Env var holding the endpoint URL. Unset means "offline": skip the fetch.
pub const ENDPOINT_ENV: &str = "PIXEL_TIMES_MNEMONIC_URL";
/// Env var holding the bearer token, if the endpoint wants one.
pub const API_KEY_ENV: &str = "PIXEL_TIMES_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

const FALLBACK_VISUAL_CUE: &str = "想象数字在跳舞！";
const FALLBACK_EMOJIS: &str = "🔢✨🎈";

#[derive(Debug, Serialize)]
struct MnemonicRequest {
    #[serde(rename = "factorA")]
    factor_a: u32,
    #[serde(rename = "factorB")]
    factor_b: u32,
    product: u32,
}

impl From<Fact> for MnemonicRequest {
    fn from(fact: Fact) -> Self {
        Self {
            factor_a: fact.factor_a,
            factor_b: fact.factor_b,
            product: fact.product,
        }
    }
}

/// The card shown when the remote provider is absent, slow or broken.
pub fn fallback_mnemonic(fact: &Fact) -> Mnemonic {
    Mnemonic {
        rhyme: format!(
            "{} 乘 {} 等于 {}，你真棒！",
            fact.factor_a, fact.factor_b, fact.product
        ),
        visual_cue: FALLBACK_VISUAL_CUE.to_string(),
        emojis: FALLBACK_EMOJIS.to_string(),
    }
}

/// Kicks off a background fetch for `fact`. Returns `None` when no endpoint
/// is configured; otherwise the receiver yields exactly one mnemonic (remote
/// on success, fallback on any error).
pub fn spawn_fetch(fact: Fact) -> Option<Receiver<Mnemonic>> {
    let url = std::env::var(ENDPOINT_ENV).ok()?;
    if url.trim().is_empty() {
        return None;
    }
    let api_key = std::env::var(API_KEY_ENV).ok();

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mnemonic = match fetch(&url, api_key.as_deref(), fact) {
            Ok(m) => {
                log::debug!(
                    "mnemonic for {}x{} fetched remotely",
                    fact.factor_a,
                    fact.factor_b
                );
                m
            }
            Err(e) => {
                log::warn!("mnemonic fetch failed, using fallback: {e}");
                fallback_mnemonic(&fact)
            }
        };
        // The app may already be on the next question; a dead receiver is fine.
        let _ = tx.send(mnemonic);
    });
    Some(rx)
}

fn fetch(url: &str, api_key: Option<&str>, fact: Fact) -> Result<Mnemonic, Box<dyn std::error::Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let mut request = client.post(url).json(&MnemonicRequest::from(fact));
    if let Some(key) = api_key {
        request = request.bearer_auth(key);
    }

    let mnemonic: Mnemonic = request.send()?.error_for_status()?.json()?;
    if mnemonic.rhyme.trim().is_empty() {
        return Err("mnemonic response has an empty rhyme".into());
    }
    Ok(mnemonic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_deterministic_and_names_the_fact() {
        let fact = Fact::new(3, 7);
        let a = fallback_mnemonic(&fact);
        let b = fallback_mnemonic(&fact);
        assert_eq!(a, b);
        assert_eq!(a.rhyme, "3 乘 7 等于 21，你真棒！");
        assert_eq!(a.visual_cue, FALLBACK_VISUAL_CUE);
        assert_eq!(a.emojis, FALLBACK_EMOJIS);
    }

    #[test]
    fn request_serializes_with_camel_case_factors() {
        let json = serde_json::to_string(&MnemonicRequest::from(Fact::new(4, 5))).unwrap();
        assert_eq!(json, r#"{"factorA":4,"factorB":5,"product":20}"#);
    }
}
