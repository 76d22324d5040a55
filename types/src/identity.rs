use crate::{GUEST_ID, GUEST_NAME};
use serde::{Deserialize, Serialize};

/// User identity supplied by the host platform, read once at session start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: u64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl UserIdentity {
    /// Synthetic identity used when the host provides no user data.
    pub fn guest() -> Self {
        Self {
            id: GUEST_ID,
            first_name: GUEST_NAME.to_string(),
            photo_url: None,
        }
    }

    /// Parse host-provided identity JSON. Missing or malformed input falls
    /// back to the guest identity rather than failing session start.
    pub fn from_host_json(raw: Option<&str>) -> Self {
        raw.and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_else(Self::guest)
    }
}
