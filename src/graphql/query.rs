// Query documents sent to the API. Field names and aliases are part of the
// wire contract and must stay in sync with the serde models.

/// Operation name of [`HOME_QUERY`].
pub const HOME_OPERATION: &str = "home";

pub const HOME_QUERY: &str = r#"
  query home {
    transactions {
      transactions {
        amount
        createdAt
        currency
        id
        type
        fromCollective {
          id
          image
          name
          slug
        }
        host {
          name
          slug
        }
        ... on Order {
          subscription {
            interval
          }
        }
      }
    }
    recent: allCollectives(type: COLLECTIVE, orderBy: createdAt, orderDirection: DESC, limit: 4) {
      collectives {
        id
        type
        slug
        name
        image
        backgroundImage
        description
        settings
        stats {
          id
          balance
          yearlyBudget
          backers {
            users
            organizations
          }
        }
      }
    }
    activeSpending: expenses(status: PAID, orderBy: { field: updatedAt }) {
      expenses {
        collective {
          id
          type
          slug
          name
          image
          backgroundImage
          description
          settings
          stats {
            id
            balance
            yearlyBudget
            backers {
              users
              organizations
            }
          }
        }
      }
    }
  }
"#;

pub const LOGGED_IN_USER_OPERATION: &str = "LoggedInUser";

pub const LOGGED_IN_USER_QUERY: &str = r#"
  query LoggedInUser {
    LoggedInUser {
      id
      username
      firstName
      lastName
      image
      collective {
        slug
        name
      }
    }
  }
"#;
