use crate::dom;
use crate::error::RenderError;
use crate::html::{Handler, JsArg, MarkupWriter};
use crate::icons;
use crate::node::Render;
use crate::price::Price;
use crate::props::{FromProps, Properties, PropertiesExt};

/// Menu card for one dish. `name` is required.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl CatalogItem {
    pub const VARIANT: &'static str = "CatalogItem";
    pub const DEFAULT_DESCRIPTION: &'static str = "No description available";
    pub const DEFAULT_IMAGE: &'static str = "https://picsum.photos/300/200";
    pub const DEFAULT_CATEGORY: &'static str = "food";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: Price::ZERO,
            description: Self::DEFAULT_DESCRIPTION.to_string(),
            image: Self::DEFAULT_IMAGE.to_string(),
            category: Self::DEFAULT_CATEGORY.to_string(),
        }
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl FromProps for CatalogItem {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let name = props
            .string("name")
            .ok_or(RenderError::missing(Self::VARIANT, "name"))?;

        let mut item = Self::new(name);
        if let Some(price) = props.price(Self::VARIANT, "price") {
            item.price = price;
        }
        if let Some(description) = props.string("description") {
            item.description = description;
        }
        if let Some(image) = props.string("image") {
            item.image = image;
        }
        if let Some(category) = props.string("category") {
            item.category = category;
        }
        Ok(item)
    }
}

impl Render for CatalogItem {
    fn render_into(&self, w: &mut MarkupWriter) {
        let price = self.price.to_string();

        w.open(
            "div",
            &[
                ("class", dom::CATALOG_ITEM_CLASS),
                (dom::DATA_NAME, self.name.as_str()),
                (dom::DATA_CATEGORY, self.category.as_str()),
            ],
        );
        w.open("div", &[("class", "bg-white rounded-xl shadow-md overflow-hidden hover:shadow-lg transition-all duration-300 transform hover:-translate-y-1")]);

        w.open("div", &[("class", "h-40 bg-gray-200 relative overflow-hidden")]);
        w.open(
            "img",
            &[
                ("src", self.image.as_str()),
                ("alt", self.name.as_str()),
                ("class", "w-full h-full object-cover"),
            ],
        );
        w.close("img");
        w.element(
            "div",
            &[("class", "absolute top-3 right-3 bg-indigo-600 text-white px-2 py-1 rounded-lg text-sm font-bold")],
            &self.price.display_baht(),
        );
        w.close("div");

        w.open("div", &[("class", "p-4")]);
        w.element("h3", &[("class", "text-lg font-bold text-gray-800 mb-1")], &self.name);
        w.element("p", &[("class", "text-gray-600 text-sm h-10 overflow-hidden")], &self.description);
        w.open("div", &[("class", "mt-4 flex justify-between items-center")]);
        w.element(
            "span",
            &[("class", "text-xs bg-indigo-100 text-indigo-800 px-2 py-1 rounded")],
            &self.category,
        );
        let on_click = Handler::call(
            "window.addToCart",
            &[JsArg::Str(&self.name), JsArg::Str(&price)],
        );
        w.open(
            "button",
            &[
                ("class", "bg-indigo-600 text-white font-medium py-1 px-3 rounded-lg hover:bg-indigo-700 transition-all flex items-center"),
                ("onclick", on_click.as_str()),
            ],
        );
        icons::write(w, icons::PLUS, "h-4 w-4 mr-1");
        w.text("เพิ่ม");
        w.close("button");
        w.close("div");
        w.close("div");

        w.close("div");
        w.close("div");
    }
}
