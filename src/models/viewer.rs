use serde::Deserialize;

/// The signed-in viewer, as returned by the `LoggedInUser` query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image: Option<String>,
    pub collective: Option<ViewerCollective>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ViewerCollective {
    pub slug: String,
    pub name: Option<String>,
}

impl LoggedInUser {
    /// Best available human name: first name, then collective name, then username.
    pub fn display_name(&self) -> String {
        self.first_name
            .as_deref()
            .or_else(|| self.collective.as_ref().and_then(|c| c.name.as_deref()))
            .or(self.username.as_deref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Member")
            .to_string()
    }

    /// Profile path, when the viewer owns a collective page.
    pub fn profile_path(&self) -> Option<String> {
        self.collective.as_ref().map(|c| format!("/{}", c.slug))
    }
}

/// Viewer state held by the page.
///
/// Starts as `Placeholder` (nothing fetched yet) and is replaced at most once
/// by `Resolved`, whose inner value is `None` when the lookup came back empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UserSlot {
    #[default]
    Placeholder,
    Resolved(Option<LoggedInUser>),
}

impl UserSlot {
    pub fn user(&self) -> Option<&LoggedInUser> {
        match self {
            UserSlot::Resolved(Some(user)) => Some(user),
            _ => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, UserSlot::Placeholder)
    }
}
