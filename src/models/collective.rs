use serde::Deserialize;

/// A fundraising collective as returned by `allCollectives` and `expenses`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collective {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub slug: String,
    pub name: String,
    pub image: Option<String>,
    pub background_image: Option<String>,
    pub description: Option<String>,
    /// Free-form JSON owned by the collective admins.
    #[serde(default)]
    pub settings: serde_json::Value,
    pub stats: Option<CollectiveStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectiveStats {
    pub id: i64,
    pub balance: Option<i64>,       // cents
    pub yearly_budget: Option<i64>, // cents
    pub backers: Option<Backers>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Backers {
    pub users: Option<i64>,
    pub organizations: Option<i64>,
}

impl Backers {
    pub fn total(&self) -> i64 {
        self.users.unwrap_or(0) + self.organizations.unwrap_or(0)
    }
}

impl Collective {
    pub fn backer_count(&self) -> i64 {
        self.stats
            .as_ref()
            .and_then(|s| s.backers.as_ref())
            .map(Backers::total)
            .unwrap_or(0)
    }

    pub fn balance(&self) -> i64 {
        self.stats.as_ref().and_then(|s| s.balance).unwrap_or(0)
    }

    pub fn yearly_budget(&self) -> i64 {
        self.stats.as_ref().and_then(|s| s.yearly_budget).unwrap_or(0)
    }
}

/// `recent` slice: `{ collectives: [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CollectivePage {
    #[serde(default)]
    pub collectives: Vec<Collective>,
}
