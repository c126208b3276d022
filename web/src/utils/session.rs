use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// The signed-in user as the screens consume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Claims {
    sub: String, // User ID
    exp: usize,  // Expiration time
    name: String,
    avatar_url: String,
}

const TOKEN_KEY: &str = "salonbook_auth_token";

/// Reads the signed-in user from the JWT stored in localStorage.
/// Returns None when the token is missing or malformed.
pub fn current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn getItem(key: &str) -> Option<String>;
        }

        if let Some(token) = getItem(TOKEN_KEY) {
            if token.is_empty() {
                return None;
            }

            if let Some(claims) = decode_jwt_token(&token) {
                return Some(SessionUser {
                    name: claims.name,
                    avatar_url: claims.avatar_url,
                });
            }
        }
    }

    // On the server side there is no localStorage; the shell renders the
    // signed-out header and hydration fills the profile in.
    None
}

/// Hook to read the session user reactively once the client has hydrated.
pub fn use_session_user() -> Signal<Option<SessionUser>> {
    let user = RwSignal::new(None::<SessionUser>);

    Effect::new(move |_| {
        user.set(current_user());
    });

    user.into()
}

/// Clears the stored token and returns to the landing page.
pub fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn removeItem(key: &str);
        }

        removeItem(TOKEN_KEY);
    }

    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

/// Decodes the JWT payload without verifying the signature; verification is
/// the backend's job, the client only needs the display claims.
fn decode_jwt_token(token: &str) -> Option<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    // Decode the payload (second part)
    let payload = parts[1];

    // Add padding if needed for base64 decoding
    let padded_payload = match payload.len() % 4 {
        2 => format!("{}==", payload),
        3 => format!("{}=", payload),
        _ => payload.to_string(),
    };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_name = atob)]
            fn base64_decode(data: &str) -> String;
        }

        if let Ok(decoded) = std::panic::catch_unwind(|| base64_decode(&padded_payload)) {
            if let Ok(claims) = serde_json::from_str::<Claims>(&decoded) {
                return Some(claims);
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = padded_payload;

    None
}
