use crate::error::RenderError;
use crate::html::{Handler, JsArg, MarkupWriter};
use crate::icons;
use crate::node::Render;
use crate::props::{FromProps, Properties, PropertiesExt};

const SETTINGS: [(&str, &str); 3] = [
    ("แก้ไขโปรไฟล์", icons::USER),
    ("การแจ้งเตือน", icons::BELL),
    ("วิธีการชำระเงิน", icons::CARD),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub membership: String,
}

impl ProfileCard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// First character of the name, for the avatar.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

impl Default for ProfileCard {
    fn default() -> Self {
        Self {
            name: "สมชาย สบายดี".to_string(),
            email: "somchai@example.com".to_string(),
            phone: "099-999-9999".to_string(),
            membership: "สมาชิกทั่วไป".to_string(),
        }
    }
}

impl FromProps for ProfileCard {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let defaults = Self::default();
        Ok(Self {
            name: props.string("name").unwrap_or(defaults.name),
            email: props.string("email").unwrap_or(defaults.email),
            phone: props.string("phone").unwrap_or(defaults.phone),
            membership: props.string("membership").unwrap_or(defaults.membership),
        })
    }
}

impl Render for ProfileCard {
    fn render_into(&self, w: &mut MarkupWriter) {
        w.open("div", &[("class", "bg-white rounded-xl shadow-md overflow-hidden")]);

        w.open("div", &[("class", "p-8 bg-gradient-to-r from-indigo-600 to-blue-500 text-white text-center")]);
        w.element(
            "div",
            &[("class", "w-24 h-24 mx-auto bg-white rounded-full flex items-center justify-center text-indigo-600 text-4xl font-bold mb-4")],
            &self.initial(),
        );
        w.element("h2", &[("class", "text-2xl font-bold")], &self.name);
        w.element("p", &[("class", "text-indigo-100")], &self.membership);
        w.close("div");

        w.open("div", &[("class", "p-6")]);
        w.open("div", &[("class", "mb-6")]);
        w.element("h3", &[("class", "text-lg font-bold text-gray-800 mb-4")], "ข้อมูลส่วนตัว");
        for (icon, value, class) in [
            (icons::MAIL, &self.email, "flex items-center gap-3 mb-3"),
            (icons::PHONE, &self.phone, "flex items-center gap-3"),
        ] {
            w.open("div", &[("class", class)]);
            icons::write(w, icon, "h-5 w-5 text-gray-500");
            w.element("span", &[("class", "text-gray-600")], value);
            w.close("div");
        }
        w.close("div");

        w.element("h3", &[("class", "text-lg font-bold text-gray-800 mb-4")], "การตั้งค่า");
        w.open("div", &[("class", "space-y-3")]);
        for (label, icon) in SETTINGS {
            w.open("button", &[("class", "w-full flex items-center justify-between bg-gray-50 p-3 rounded-lg hover:bg-gray-100")]);
            w.open("div", &[("class", "flex items-center gap-3")]);
            icons::write(w, icon, "h-5 w-5 text-gray-500");
            w.element("span", &[], label);
            w.close("div");
            icons::write(w, icons::CHEVRON_RIGHT, "h-5 w-5 text-gray-400");
            w.close("button");
        }
        w.close("div");

        let logout = Handler::call("alert", &[JsArg::Str("Logged out!")]);
        w.open(
            "button",
            &[
                ("class", "mt-6 w-full bg-red-500 text-white font-medium py-3 px-4 rounded-lg hover:bg-red-600 transition-all flex justify-center items-center"),
                ("onclick", logout.as_str()),
            ],
        );
        icons::write(w, icons::LOGOUT, "h-5 w-5 mr-2");
        w.text("ออกจากระบบ");
        w.close("button");
        w.close("div");

        w.close("div");
    }
}
