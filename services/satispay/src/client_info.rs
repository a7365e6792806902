use crate::constants::*;
use paysign_core::utils::is_blank;
use paysign_core::{Context, HeaderSet, Result};
use serde::Deserialize;

/// Client identification sent with every call.
///
/// All fields are optional. `User-Agent` is always sent and falls back to
/// the crate user agent; every `x-satispay-*` header is only sent when its
/// own field is set and not blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientInfo {
    /// User agent.
    pub user_agent: Option<String>,
    /// Operating system or platform name.
    pub platform_name: Option<String>,
    /// Operating system or platform version.
    pub platform_version: Option<String>,
    /// Application name.
    pub app_name: Option<String>,
    /// Application version.
    pub app_version: Option<String>,
    /// Device type.
    pub device_type: Option<String>,
    /// Tracking code.
    pub tracking_code: Option<String>,
}

impl ClientInfo {
    /// Load client info from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            user_agent: ctx.env_var(SATISPAY_USER_AGENT),
            platform_name: ctx.env_var(SATISPAY_PLATFORM_NAME),
            platform_version: ctx.env_var(SATISPAY_PLATFORM_VERSION),
            app_name: ctx.env_var(SATISPAY_APP_NAME),
            app_version: ctx.env_var(SATISPAY_APP_VERSION),
            device_type: ctx.env_var(SATISPAY_DEVICE_TYPE),
            tracking_code: ctx.env_var(SATISPAY_TRACKING_CODE),
        }
    }

    /// Fill unset fields from `other`.
    pub fn merge(self, other: ClientInfo) -> Self {
        Self {
            user_agent: self.user_agent.or(other.user_agent),
            platform_name: self.platform_name.or(other.platform_name),
            platform_version: self.platform_version.or(other.platform_version),
            app_name: self.app_name.or(other.app_name),
            app_version: self.app_version.or(other.app_version),
            device_type: self.device_type.or(other.device_type),
            tracking_code: self.tracking_code.or(other.tracking_code),
        }
    }

    /// Build the identification headers in wire order.
    pub fn headers(&self) -> Result<HeaderSet> {
        let mut headers = HeaderSet::new();

        let user_agent = match self.user_agent.as_deref() {
            Some(v) if !is_blank(Some(v)) => v,
            _ => DEFAULT_USER_AGENT,
        };
        headers.insert_str("User-Agent", user_agent)?;

        for (name, value) in [
            (HEADER_PLATFORM_NAME, &self.platform_name),
            (HEADER_PLATFORM_VERSION, &self.platform_version),
            (HEADER_APP_NAME, &self.app_name),
            (HEADER_APP_VERSION, &self.app_version),
            (HEADER_DEVICE_TYPE, &self.device_type),
            (HEADER_TRACKING_CODE, &self.tracking_code),
        ] {
            if let Some(v) = value.as_deref().filter(|v| !is_blank(Some(*v))) {
                headers.insert_str(name, v)?;
            }
        }

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paysign_core::StaticEnv;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_default_headers() {
        let headers = ClientInfo::default().headers().unwrap();
        assert_eq!(headers.names(), vec!["user-agent"]);
        assert_eq!(headers.get("user-agent").unwrap(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_each_header_gated_on_its_own_field() {
        let info = ClientInfo {
            platform_name: Some("linux".into()),
            platform_version: Some("  ".into()),
            app_name: None,
            device_type: Some("POS".into()),
            tracking_code: Some("abc".into()),
            ..Default::default()
        };

        let headers = info.headers().unwrap();
        assert_eq!(
            headers.names(),
            vec![
                "user-agent",
                "x-satispay-os",
                "x-satispay-devicetype",
                "x-satispay-tracking-code"
            ]
        );
        assert_eq!(headers.get("x-satispay-devicetype").unwrap(), "POS");
    }

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (SATISPAY_APP_NAME.to_string(), "shop".to_string()),
                (SATISPAY_APP_VERSION.to_string(), "1.2.3".to_string()),
            ]),
        });

        let info = ClientInfo::from_env(&ctx).merge(ClientInfo {
            app_name: Some("ignored".into()),
            user_agent: Some("my-agent/1.0".into()),
            ..Default::default()
        });
        assert_eq!(info.app_name.as_deref(), Some("shop"));
        assert_eq!(info.user_agent.as_deref(), Some("my-agent/1.0"));

        let headers = info.headers().unwrap();
        assert_eq!(
            headers.names(),
            vec!["user-agent", "x-satispay-appn", "x-satispay-appv"]
        );
    }
}
