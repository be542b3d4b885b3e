use crate::auth::application::ports::outgoing::AccessClaims;

pub const ADMIN_ROLE: &str = "admin";

/// Decides which verified identities may use the admin API.
#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    admin_emails: Vec<String>,
}

impl AdminPolicy {
    pub fn new<I, S>(admin_emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            admin_emails: admin_emails
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// Reads `ADMIN_EMAILS` (comma separated). Missing means role-based admins only.
    pub fn from_env() -> Self {
        let raw = std::env::var("ADMIN_EMAILS").unwrap_or_default();
        Self::new(raw.split(','))
    }

    pub fn is_admin(&self, claims: &AccessClaims) -> bool {
        if claims.app_metadata.role.as_deref() == Some(ADMIN_ROLE) {
            return true;
        }

        match claims.email.as_deref() {
            Some(email) => {
                let email = email.trim().to_lowercase();
                self.admin_emails.iter().any(|allowed| *allowed == email)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::AppMetadata;
    use uuid::Uuid;

    fn claims(email: Option<&str>, role: Option<&str>) -> AccessClaims {
        AccessClaims {
            sub: Uuid::new_v4(),
            exp: 9_999_999_999,
            iat: 0,
            aud: "authenticated".to_string(),
            email: email.map(str::to_string),
            role: Some("authenticated".to_string()),
            app_metadata: AppMetadata {
                role: role.map(str::to_string),
            },
        }
    }

    #[test]
    fn allow_listed_email_is_admin_case_insensitive() {
        let policy = AdminPolicy::new(["Owner@Example.com "]);
        assert!(policy.is_admin(&claims(Some("owner@example.COM"), None)));
    }

    #[test]
    fn admin_role_is_admin_without_allow_list() {
        let policy = AdminPolicy::default();
        assert!(policy.is_admin(&claims(None, Some("admin"))));
    }

    #[test]
    fn other_users_are_not_admin() {
        let policy = AdminPolicy::new(["owner@example.com", ""]);
        assert!(!policy.is_admin(&claims(Some("visitor@example.com"), None)));
        assert!(!policy.is_admin(&claims(None, Some("editor"))));
    }
}
