use crate::report::report_model::{FlatMap, value_text};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::RenderEvent;
use crate::view::ids::BlockIdGenerator;
use crate::view::node::Element;
use crate::view::toggle::{BlockState, BlockToggle, Display};
use crate::view::url::is_valid_http_url;

// ============================================================================
// View builder — titled, collapsible blocks
// ============================================================================

/// Key-value rows are laid out in groups of this many.
pub const ITEMS_PER_GROUP: usize = 3;

/// Builds the element tree for one render session.
///
/// Owns the block id sequence, so ids are unique within everything a single
/// builder produces.
pub struct ViewBuilder<'a> {
    ids: BlockIdGenerator,
    tracer: Option<&'a TraceLogger>,
}

impl Default for ViewBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ViewBuilder<'a> {
    pub fn new() -> Self {
        Self {
            ids: BlockIdGenerator::new(),
            tracer: None,
        }
    }

    pub fn with_ids(mut self, ids: BlockIdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_tracer(mut self, tracer: &'a TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub(crate) fn tracer(&self) -> Option<&'a TraceLogger> {
        self.tracer
    }

    /// A titled block listing every mapping entry as a `key: value` row.
    ///
    /// `extra`, when given, is appended after the rows inside the same
    /// collapsible container. The block is returned unattached.
    pub fn render_key_value_block(
        &mut self,
        mapping: &FlatMap,
        title: &str,
        expanded: bool,
        extra: Option<Element>,
    ) -> Element {
        let mut shell = self.begin_block(title, expanded, mapping.len());
        render_items(mapping, &mut shell.data);
        if let Some(extra) = extra {
            shell.data.append(extra);
        }
        shell.finish()
    }

    /// A titled block with no rows, wrapping `child`.
    pub fn render_container_block(&mut self, child: Element, title: &str, expanded: bool) -> Element {
        let mut shell = self.begin_block(title, expanded, 0);
        shell.data.append(child);
        shell.finish()
    }

    /// Allocate an id and build the block chrome; contents go into `data`.
    pub(crate) fn begin_block(&mut self, title: &str, expanded: bool, rows: usize) -> BlockShell {
        let id = self.ids.next_id(title);

        if let Some(tracer) = self.tracer {
            tracer.log(
                &RenderEvent::now("block")
                    .with_title(title)
                    .with_block(&id, expanded)
                    .with_rows(rows),
            );
        }

        let mut checkbox = Element::new("input")
            .with_attr("type", "checkbox")
            .with_attr("data-toggle", id.as_str());
        if expanded {
            checkbox.set_attr("checked", "");
        }

        let title_bar = Element::new("div")
            .with_class("block-title")
            .with_child(Element::new("label").with_class("block-name").with_text(title))
            .with_child(
                Element::new("label")
                    .with_class("switch")
                    .with_child(checkbox)
                    .with_child(Element::new("span").with_class("slider")),
            );

        let block = Element::new("div")
            .with_class("block-report")
            .with_attr("data-items-container", id.as_str())
            .with_child(title_bar);

        let toggle = BlockToggle::new(expanded);
        let mut data = Element::new("div").with_id(id.as_str()).with_class("box");
        apply_visibility(&mut data, &toggle);

        BlockShell { block, data }
    }
}

/// A block under construction.
pub(crate) struct BlockShell {
    block: Element,
    pub(crate) data: Element,
}

impl BlockShell {
    pub(crate) fn finish(self) -> Element {
        let BlockShell { mut block, data } = self;
        block.append(data);
        block
    }
}

/// Mirror a toggle's settled state onto the data container's markup.
fn apply_visibility(data: &mut Element, toggle: &BlockToggle) {
    let visibility = toggle.visibility();
    if visibility.hidden {
        data.add_class("hide");
    }
    if visibility.display == Display::None {
        data.set_attr("style", "display:none");
    }
    let state = match toggle.state() {
        BlockState::Expanded => "expanded",
        BlockState::Collapsing => "collapsing",
        BlockState::Collapsed => "collapsed",
        BlockState::Expanding => "expanding",
    };
    data.set_attr("data-state", state);
}

/// Append one `item` per entry, opening a new `item-parent` group every
/// [`ITEMS_PER_GROUP`] entries.
pub fn render_items(mapping: &FlatMap, container: &mut Element) {
    let mut group: Option<Element> = None;
    for (i, (key, value)) in mapping.iter().enumerate() {
        if i % ITEMS_PER_GROUP == 0 {
            if let Some(full) = group.take() {
                container.append(full);
            }
            group = Some(Element::new("div").with_class("item-parent"));
        }
        if let Some(g) = group.as_mut() {
            g.append(render_item(key, &value_text(value)));
        }
    }
    if let Some(last) = group {
        container.append(last);
    }
}

/// `key: value`, with URL values rendered as a link opening in a new tab.
pub fn render_item(key: &str, value: &str) -> Element {
    let label = Element::new("span")
        .with_class("item-key")
        .with_text(format!("{}: ", key));

    let value_el = if is_valid_http_url(value) {
        Element::new("a")
            .with_class("link")
            .with_attr("href", value)
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener noreferrer")
            .with_text(value)
    } else {
        Element::new("span").with_class("item-value").with_text(value)
    };

    Element::new("div")
        .with_class("item")
        .with_child(label)
        .with_child(value_el)
}
