// Askama template contexts and the display rows they iterate over.

mod home;

pub use self::home::{
    CollectiveCard, HeaderContext, HomeTemplate, LoadingTemplate, PageContext, SigninTemplate, TransactionRow,
    ViewerBadge,
};
