use crate::dom;
use crate::error::RenderError;
use crate::html::{Handler, JsArg, MarkupWriter};
use crate::icons;
use crate::node::Render;
use crate::props::{FromProps, Properties, PropertiesExt};

/// Sticky top bar with desktop navigation, the cart badges and the mobile
/// menu overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct AppBar {
    pub title: String,
    pub logo: String,
    pub home_label: String,
    pub cart_label: String,
    pub profile_label: String,
}

impl AppBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    fn destinations(&self) -> [(&'static str, &str, &'static str); 3] {
        [
            ("home", self.home_label.as_str(), icons::HOME),
            ("cart", self.cart_label.as_str(), icons::CART),
            ("profile", self.profile_label.as_str(), icons::USER),
        ]
    }

    fn write_desktop_nav(&self, w: &mut MarkupWriter) {
        w.open("div", &[("class", "hidden md:flex items-center gap-6")]);
        for (page, label, icon) in self.destinations() {
            let on_click = Handler::call("window.showPage", &[JsArg::Str(page)]);
            w.open(
                "button",
                &[
                    ("class", "text-white hover:text-blue-200 flex items-center"),
                    ("onclick", on_click.as_str()),
                ],
            );
            icons::write(w, icon, "h-5 w-5 mr-1");
            w.text(label);
            if page == "cart" {
                write_badge(w, dom::CART_COUNT);
            }
            w.close("button");
        }
        w.close("div");
    }

    fn write_mobile_menu(&self, w: &mut MarkupWriter) {
        let toggle = Handler::call("window.toggleMobileMenu", &[]);
        let class = format!(
            "{} md:hidden fixed inset-0 bg-indigo-800 bg-opacity-95 z-50 flex flex-col items-center justify-center",
            dom::HIDDEN
        );
        w.open("div", &[("id", dom::MOBILE_MENU), ("class", class.as_str())]);
        w.open(
            "button",
            &[("class", "absolute top-4 right-4 text-white"), ("onclick", toggle.as_str())],
        );
        icons::write(w, icons::CLOSE, "h-6 w-6");
        w.close("button");

        w.open("div", &[("class", "flex flex-col items-center gap-8")]);
        for (page, label, icon) in self.destinations() {
            let on_click = Handler::call("window.showMobilePage", &[JsArg::Str(page)]);
            w.open(
                "button",
                &[
                    ("class", "text-white text-xl flex items-center"),
                    ("onclick", on_click.as_str()),
                ],
            );
            icons::write(w, icon, "h-6 w-6 mr-2");
            w.text(label);
            if page == "cart" {
                write_badge(w, dom::MOBILE_CART_COUNT);
            }
            w.close("button");
        }
        w.close("div");
        w.close("div");
    }
}

fn write_badge(w: &mut MarkupWriter, id: &str) {
    w.text(" (");
    w.element("span", &[("id", id)], "0");
    w.text(")");
}

impl Default for AppBar {
    fn default() -> Self {
        Self {
            title: "Food App".to_string(),
            logo: "🍔".to_string(),
            home_label: "หน้าแรก".to_string(),
            cart_label: "ตะกร้า".to_string(),
            profile_label: "โปรไฟล์".to_string(),
        }
    }
}

impl FromProps for AppBar {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let defaults = Self::default();
        Ok(Self {
            title: props.string("title").unwrap_or(defaults.title),
            logo: props.string("logo").unwrap_or(defaults.logo),
            home_label: props.string("homeLabel").unwrap_or(defaults.home_label),
            cart_label: props.string("cartLabel").unwrap_or(defaults.cart_label),
            profile_label: props.string("profileLabel").unwrap_or(defaults.profile_label),
        })
    }
}

impl Render for AppBar {
    fn render_into(&self, w: &mut MarkupWriter) {
        w.open("div", &[("class", "w-full bg-gradient-to-r from-indigo-600 to-blue-500 text-white py-4 px-6 flex justify-between items-center shadow-md sticky top-0 z-50")]);
        w.open("div", &[("class", "flex items-center gap-2")]);
        w.element("span", &[("class", "text-2xl")], &self.logo);
        w.element("span", &[("class", "text-xl font-bold")], &self.title);
        w.close("div");

        self.write_desktop_nav(w);

        let toggle = Handler::call("window.toggleMobileMenu", &[]);
        w.open(
            "button",
            &[("class", "md:hidden text-white"), ("onclick", toggle.as_str())],
        );
        icons::write(w, icons::MENU, "h-6 w-6");
        w.close("button");
        w.close("div");

        self.write_mobile_menu(w);
    }
}
