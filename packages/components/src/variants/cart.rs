use crate::dom;
use crate::error::RenderError;
use crate::html::{Handler, JsArg, MarkupWriter};
use crate::icons;
use crate::node::Render;
use crate::price::Price;
use crate::props::{FromProps, Properties, PropertiesExt};

/// Static frame of the cart page. The client engine fills `cart-items`,
/// `cart-total` and toggles the empty state.
#[derive(Debug, Clone, PartialEq)]
pub struct CartPanel {
    pub empty_message: String,
    pub back_label: String,
    pub heading: String,
    pub total_label: String,
}

impl Default for CartPanel {
    fn default() -> Self {
        Self {
            empty_message: "ตะกร้าของคุณว่างเปล่า".to_string(),
            back_label: "กลับไปเลือกซื้ออาหาร".to_string(),
            heading: "รายการอาหารในตะกร้า".to_string(),
            total_label: "ราคารวม:".to_string(),
        }
    }
}

impl FromProps for CartPanel {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let defaults = Self::default();
        Ok(Self {
            empty_message: props.string("emptyMessage").unwrap_or(defaults.empty_message),
            back_label: props.string("backLabel").unwrap_or(defaults.back_label),
            heading: props.string("heading").unwrap_or(defaults.heading),
            total_label: props.string("totalLabel").unwrap_or(defaults.total_label),
        })
    }
}

impl Render for CartPanel {
    fn render_into(&self, w: &mut MarkupWriter) {
        w.open("div", &[("class", "bg-white p-6 rounded-xl shadow-md")]);

        w.open("div", &[("id", dom::CART_EMPTY), ("class", "text-center text-gray-500 py-6")]);
        icons::write(w, icons::CART, "h-16 w-16 mx-auto mb-4 text-gray-300");
        w.element("p", &[], &self.empty_message);
        let back = Handler::call("window.showPage", &[JsArg::Str("home")]);
        w.element(
            "button",
            &[
                ("class", "mt-4 text-indigo-600 hover:text-indigo-800 font-medium"),
                ("onclick", back.as_str()),
            ],
            &self.back_label,
        );
        w.close("div");

        w.open("div", &[("id", dom::CART_ITEMS_CONTAINER), ("class", dom::HIDDEN)]);
        w.element("h3", &[("class", "text-lg font-bold text-gray-800 mb-4")], &self.heading);
        w.open("ul", &[("id", dom::CART_ITEMS), ("class", "divide-y")]);
        w.close("ul");
        w.open("div", &[("class", "mt-6 pt-4 border-t")]);
        w.open("div", &[("class", "flex justify-between items-center mb-2")]);
        w.element("span", &[("class", "text-gray-600")], &self.total_label);
        w.element(
            "span",
            &[("class", "text-xl font-bold text-gray-800"), ("id", dom::CART_TOTAL)],
            &Price::ZERO.display_baht(),
        );
        w.close("div");
        w.close("div");
        w.close("div");

        w.close("div");
    }
}

/// One row of the cart list, rendered by the client engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Position in the cart at render time; baked into the row's handlers.
    pub index: usize,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    pub const VARIANT: &'static str = "CartLine";

    pub fn new(index: usize, name: impl Into<String>, price: Price, quantity: u32) -> Self {
        Self {
            index,
            name: name.into(),
            price,
            quantity,
        }
    }
}

impl FromProps for CartLine {
    fn from_props(props: &Properties) -> Result<Self, RenderError> {
        let name = props
            .string("name")
            .ok_or(RenderError::missing(Self::VARIANT, "name"))?;
        Ok(Self {
            index: props.int("index").and_then(|i| usize::try_from(i).ok()).unwrap_or(0),
            name,
            price: props.price(Self::VARIANT, "price").unwrap_or(Price::ZERO),
            quantity: props
                .int("quantity")
                .and_then(|q| u32::try_from(q).ok())
                .filter(|q| *q > 0)
                .unwrap_or(1),
        })
    }
}

impl Render for CartLine {
    fn render_into(&self, w: &mut MarkupWriter) {
        let index = self.index as i64;
        let decrement = Handler::call("window.updateCartQuantity", &[JsArg::Int(index), JsArg::Int(-1)]);
        let increment = Handler::call("window.updateCartQuantity", &[JsArg::Int(index), JsArg::Int(1)]);
        let remove = Handler::call("window.removeFromCart", &[JsArg::Int(index)]);
        let step_class = "px-2 py-1 bg-gray-100 hover:bg-gray-200";

        w.open("li", &[("class", "py-4 flex justify-between items-center")]);
        w.open("div", &[]);
        w.element("div", &[("class", "font-medium")], &self.name);
        w.element("div", &[("class", "text-gray-500")], &self.price.display_baht());
        w.close("div");

        w.open("div", &[("class", "flex items-center gap-3")]);
        w.open("div", &[("class", "flex items-center border rounded-lg overflow-hidden")]);
        w.element("button", &[("class", step_class), ("onclick", decrement.as_str())], "-");
        w.element("span", &[("class", "px-3")], &self.quantity.to_string());
        w.element("button", &[("class", step_class), ("onclick", increment.as_str())], "+");
        w.close("div");
        w.open(
            "button",
            &[("class", "text-red-500 hover:text-red-700"), ("onclick", remove.as_str())],
        );
        icons::write(w, icons::TRASH, "h-5 w-5");
        w.close("button");
        w.close("div");
        w.close("li");
    }
}
