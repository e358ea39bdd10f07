//! Origin authorization use case

use tokio::sync::OnceCell;

use crate::domain::capture::RenderContext;
use crate::domain::origin::{AllowedDomains, Origin};
use crate::domain::permission::{Decision, PermissionStatus, MEDIA_CAPABILITY};

use super::ports::{
    ConfigStore, PermissionPrompt, PermissionStore, PromptAction, PromptOptions, PromptOutcome,
    PromptRequest,
};

/// Identifier of the access prompt
pub const ACCESS_PROMPT_ID: &str = "rainbow-access-request";

/// Text shown when asking for access
pub const ACCESS_PROMPT_MESSAGE: &str =
    "This website is requesting access to your webcam and microphone. Do you wish to allow it?";

/// Which step settled an authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The location could not be reduced to an origin
    InvalidOrigin,
    /// The origin is on the allowlist
    Allowlisted,
    /// A remembered decision was found
    Stored(Decision),
    /// The user answered the prompt; the answer is now remembered
    Answered(Decision),
    /// The prompt was closed without an answer
    Dismissed,
}

impl Resolution {
    /// Whether access is granted
    pub const fn is_allowed(&self) -> bool {
        match self {
            Self::Allowlisted => true,
            Self::Stored(d) | Self::Answered(d) => d.is_allow(),
            Self::InvalidOrigin | Self::Dismissed => false,
        }
    }
}

/// Decides whether an origin may capture media.
///
/// Order: allowlist, remembered decision, then the user. Only an explicit
/// answer to the prompt is remembered; dismissal denies this call alone.
pub struct AuthorizationGate<C, P, U>
where
    C: ConfigStore,
    P: PermissionStore,
    U: PermissionPrompt,
{
    config: C,
    permissions: P,
    prompt: U,
    allowlist: OnceCell<AllowedDomains>,
}

impl<C, P, U> AuthorizationGate<C, P, U>
where
    C: ConfigStore,
    P: PermissionStore,
    U: PermissionPrompt,
{
    /// Create a new gate; the allowlist is read on first use
    pub fn new(config: C, permissions: P, prompt: U) -> Self {
        Self {
            config,
            permissions,
            prompt,
            allowlist: OnceCell::new(),
        }
    }

    /// The allowlist, loading (and seeding) it on first access
    pub async fn allowed_domains(&self) -> &AllowedDomains {
        self.allowlist
            .get_or_init(|| self.config.load_allowed_domains())
            .await
    }

    /// Access the permission store
    pub fn permissions(&self) -> &P {
        &self.permissions
    }

    /// Decide for `location`, resolving to true (allow) or false (deny)
    pub async fn authorize(&self, context: &RenderContext, location: &str) -> bool {
        self.resolve(context, location).await.is_allowed()
    }

    /// Callback form of [`authorize`](Self::authorize); `callback` runs exactly once
    pub async fn authorize_with<F>(&self, context: &RenderContext, location: &str, callback: F)
    where
        F: FnOnce(bool) + Send,
    {
        let allowed = self.authorize(context, location).await;
        callback(allowed);
    }

    /// Decide for `location` and report which step settled it
    pub async fn resolve(&self, context: &RenderContext, location: &str) -> Resolution {
        let origin = match Origin::parse(location) {
            Ok(origin) => origin,
            Err(e) => {
                tracing::warn!(location, error = %e, "Denying unparseable location");
                return Resolution::InvalidOrigin;
            }
        };

        if self.allowed_domains().await.contains(&origin) {
            tracing::debug!(%origin, "Origin is allowlisted");
            return Resolution::Allowlisted;
        }

        match self.stored_status(&origin).await {
            PermissionStatus::Allow => {
                tracing::debug!(%origin, "Remembered allow");
                return Resolution::Stored(Decision::Allow);
            }
            PermissionStatus::Deny => {
                tracing::debug!(%origin, "Remembered deny");
                return Resolution::Stored(Decision::Deny);
            }
            PermissionStatus::Unknown => {}
        }

        self.ask_user(context, origin).await
    }

    async fn stored_status(&self, origin: &Origin) -> PermissionStatus {
        match self.permissions.test_decision(origin, MEDIA_CAPABILITY).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Permission lookup failed, asking user");
                PermissionStatus::Unknown
            }
        }
    }

    async fn ask_user(&self, context: &RenderContext, origin: Origin) -> Resolution {
        let request = Self::access_request(context, origin.clone());

        let outcome = match self.prompt.ask(&request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Prompt failed, treating as dismissed");
                PromptOutcome::Dismissed
            }
        };

        let decision = match outcome {
            PromptOutcome::Accepted => Decision::Allow,
            PromptOutcome::Declined => Decision::Deny,
            PromptOutcome::Dismissed => {
                tracing::debug!(%origin, "Prompt dismissed, not remembering");
                return Resolution::Dismissed;
            }
        };

        match self
            .permissions
            .record_decision(&origin, MEDIA_CAPABILITY, decision)
            .await
        {
            Ok(()) => tracing::info!(%origin, %decision, "Remembered user decision"),
            Err(e) => tracing::warn!(%origin, %decision, error = %e, "Failed to remember decision"),
        }

        Resolution::Answered(decision)
    }

    fn access_request(context: &RenderContext, origin: Origin) -> PromptRequest {
        PromptRequest {
            surface: context.surface().to_string(),
            id: ACCESS_PROMPT_ID.to_string(),
            origin,
            message: ACCESS_PROMPT_MESSAGE.to_string(),
            icon: None,
            primary: PromptAction::new("Yes", 'y'),
            secondary: vec![PromptAction::new("No", 'n')],
            options: PromptOptions::default(),
        }
    }
}
