use crate::error::ClientError;
use aroi_components::dom;
use std::fmt;
use std::str::FromStr;

/// Top-level page sections. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Cart,
    Profile,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Cart, Page::Profile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Cart => "cart",
            Page::Profile => "profile",
        }
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            Page::Home => dom::HOME_PAGE,
            Page::Cart => dom::CART_PAGE,
            Page::Profile => dom::PROFILE_PAGE,
        }
    }
}

impl FromStr for Page {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Page::Home),
            "cart" => Ok(Page::Cart),
            "profile" => Ok(Page::Profile),
            other => Err(ClientError::UnknownPage(other.to_string())),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub page: Page,
    pub mobile_menu_open: bool,
}

impl PageState {
    pub fn is_visible(&self, page: Page) -> bool {
        self.page == page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pages() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>(), Ok(page));
        }
        assert_eq!(
            "checkout".parse::<Page>(),
            Err(ClientError::UnknownPage("checkout".to_string()))
        );
    }

    #[test]
    fn test_initial_state_is_home_with_menu_closed() {
        let state = PageState::default();
        assert!(state.is_visible(Page::Home));
        assert!(!state.mobile_menu_open);
    }
}
