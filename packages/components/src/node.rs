use crate::error::RenderError;
use crate::html::{Markup, MarkupWriter};
use crate::props::{FromProps, Properties, PropertiesExt};
use crate::variants::*;
use serde_json::Value;
use std::str::FromStr;

/// Anything that can write itself as markup.
pub trait Render {
    fn render_into(&self, w: &mut MarkupWriter);

    fn render(&self) -> String {
        let mut w = MarkupWriter::new();
        self.render_into(&mut w);
        w.finish()
    }
}

/// One renderable unit of the UI tree.
///
/// Nodes own their children, so a tree cannot contain cycles. A node is
/// never modified by rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(Text),
    Button(Button),
    CategoryPill(CategoryPill),
    CatalogItem(CatalogItem),
    AppBar(AppBar),
    FloatingAction(FloatingAction),
    Modal(Modal),
    CartPanel(CartPanel),
    CartLine(CartLine),
    SearchBar(SearchBar),
    ProfileCard(ProfileCard),
    Toast(Toast),
    Column(Column),
    /// A node that could not be built; renders as an inline error fragment.
    Fault(RenderError),
}

/// Child of a [`Column`].
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    /// Authored markup, passed through unchanged.
    Raw(Markup),
    /// Something that is neither; carries a description of what was found.
    Invalid(String),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Markup> for Child {
    fn from(markup: Markup) -> Self {
        Child::Raw(markup)
    }
}

impl<T: Into<Node>> From<Result<T, RenderError>> for Node {
    fn from(result: Result<T, RenderError>) -> Self {
        match result {
            Ok(node) => node.into(),
            Err(e) => Node::Fault(e),
        }
    }
}

impl Render for Node {
    fn render_into(&self, w: &mut MarkupWriter) {
        match self {
            Node::Text(n) => n.render_into(w),
            Node::Button(n) => n.render_into(w),
            Node::CategoryPill(n) => n.render_into(w),
            Node::CatalogItem(n) => n.render_into(w),
            Node::AppBar(n) => n.render_into(w),
            Node::FloatingAction(n) => n.render_into(w),
            Node::Modal(n) => n.render_into(w),
            Node::CartPanel(n) => n.render_into(w),
            Node::CartLine(n) => n.render_into(w),
            Node::SearchBar(n) => n.render_into(w),
            Node::ProfileCard(n) => n.render_into(w),
            Node::Toast(n) => n.render_into(w),
            Node::Column(n) => n.render_into(w),
            Node::Fault(e) => e.write_fragment(w),
        }
    }
}

/// Container that renders its children in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: String,
    pub class: String,
    pub children: Vec<Child>,
}

impl Column {
    pub const DEFAULT_CLASS: &'static str = "flex flex-col gap-4";

    pub fn new() -> Self {
        Self {
            id: String::new(),
            class: Self::DEFAULT_CLASS.to_string(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Column {
    fn render_into(&self, w: &mut MarkupWriter) {
        w.open("div", &[("id", self.id.as_str()), ("class", self.class.as_str())]);
        for child in &self.children {
            match child {
                Child::Node(node) => node.render_into(w),
                Child::Raw(markup) => w.raw(markup),
                Child::Invalid(found) => RenderError::invalid_child(found.as_str()).write_fragment(w),
            }
        }
        w.close("div");
    }
}

/// Variant tag used by untyped trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Button,
    CategoryPill,
    CatalogItem,
    AppBar,
    FloatingAction,
    Modal,
    CartPanel,
    CartLine,
    SearchBar,
    ProfileCard,
    Toast,
    Column,
}

impl FromStr for Kind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "text" => Kind::Text,
            "button" => Kind::Button,
            "category-pill" => Kind::CategoryPill,
            "catalog-item" => Kind::CatalogItem,
            "app-bar" => Kind::AppBar,
            "floating-action" => Kind::FloatingAction,
            "modal" => Kind::Modal,
            "cart-panel" => Kind::CartPanel,
            "cart-line" => Kind::CartLine,
            "search-bar" => Kind::SearchBar,
            "profile-card" => Kind::ProfileCard,
            "toast" => Kind::Toast,
            "column" => Kind::Column,
            other => return Err(RenderError::invalid_child(format!("unknown kind `{}`", other))),
        })
    }
}

impl Node {
    /// Build a leaf node from a variant tag and an untyped property bag.
    ///
    /// Columns built this way have no children; use [`Node::from_value`]
    /// for trees.
    pub fn from_props(kind: Kind, props: &Properties) -> Node {
        match kind {
            Kind::Text => Text::from_props(props).into(),
            Kind::Button => Button::from_props(props).into(),
            Kind::CategoryPill => CategoryPill::from_props(props).into(),
            Kind::CatalogItem => CatalogItem::from_props(props).into(),
            Kind::AppBar => AppBar::from_props(props).into(),
            Kind::FloatingAction => FloatingAction::from_props(props).into(),
            Kind::Modal => Modal::from_props(props).into(),
            Kind::CartPanel => CartPanel::from_props(props).into(),
            Kind::CartLine => CartLine::from_props(props).into(),
            Kind::SearchBar => SearchBar::from_props(props).into(),
            Kind::ProfileCard => ProfileCard::from_props(props).into(),
            Kind::Toast => Toast::from_props(props).into(),
            Kind::Column => {
                let mut column = Column::new();
                if let Some(id) = props.string("id") {
                    column.id = id;
                }
                if let Some(class) = props.string("class") {
                    column.class = class;
                }
                Node::Column(column)
            }
        }
    }

    /// Build a node from `{ "kind": ..., "props": {...}, "children": [...] }`.
    ///
    /// Total: anything that is not a well-formed node becomes a
    /// [`Node::Fault`] rather than an error.
    pub fn from_value(value: &Value) -> Node {
        let Value::Object(object) = value else {
            return Node::Fault(RenderError::invalid_child(describe(value)));
        };

        let kind = match object.get("kind") {
            Some(Value::String(kind)) => match kind.parse::<Kind>() {
                Ok(kind) => kind,
                Err(e) => return Node::Fault(e),
            },
            _ => return Node::Fault(RenderError::invalid_child("object without `kind`")),
        };

        let empty = Properties::new();
        let props = match object.get("props") {
            Some(Value::Object(props)) => props,
            _ => &empty,
        };

        let mut node = Node::from_props(kind, props);
        if let Node::Column(column) = &mut node {
            if let Some(Value::Array(children)) = object.get("children") {
                column.children = children.iter().map(Child::from_value).collect();
            }
        }
        node
    }
}

impl Child {
    pub fn from_value(value: &Value) -> Child {
        match value {
            Value::String(markup) => Child::Raw(Markup::trusted(markup.as_str())),
            Value::Object(_) => Child::Node(Node::from_value(value)),
            other => Child::Invalid(describe(other)),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

macro_rules! impl_into_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(props: $variant) -> Self {
                    Node::$variant(props)
                }
            }

            impl From<$variant> for Child {
                fn from(props: $variant) -> Self {
                    Child::Node(Node::$variant(props))
                }
            }
        )*
    };
}

impl_into_node!(
    Text,
    Button,
    CategoryPill,
    CatalogItem,
    AppBar,
    FloatingAction,
    Modal,
    CartPanel,
    CartLine,
    SearchBar,
    ProfileCard,
    Toast,
    Column,
);
