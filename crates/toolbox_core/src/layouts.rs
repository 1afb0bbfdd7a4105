//! Page layout templates
//!
//! Fixed HTML/CSS pairs. The editor only tracks which one is selected.

use crate::editor::Editor;
use crate::error::EditorError;
use crate::style::{GeneratedCode, Style};

/// A ready-made page layout
#[derive(Debug, PartialEq, Eq)]
pub struct LayoutTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub html: &'static str,
    pub css: &'static str,
}

/// Every template, in gallery order
pub static TEMPLATES: [LayoutTemplate; 8] = [
    LayoutTemplate {
        id: "holy-grail",
        name: "Holy Grail",
        description: "Classic layout with header, footer, sidebar and main content",
        html: r#"<div class="holy-grail">
  <header>Header</header>
  <nav>Navigation</nav>
  <main>Main Content</main>
  <aside>Sidebar</aside>
  <footer>Footer</footer>
</div>"#,
        css: r#".holy-grail {
  display: grid;
  grid-template-areas:
    "header header header"
    "nav main aside"
    "footer footer footer";
  grid-template-columns: 200px 1fr 200px;
  grid-template-rows: auto 1fr auto;
  min-height: 100vh;
  gap: 16px;
}

header { grid-area: header; }
nav { grid-area: nav; }
main { grid-area: main; }
aside { grid-area: aside; }
footer { grid-area: footer; }"#,
    },
    LayoutTemplate {
        id: "sidebar-layout",
        name: "Sidebar Fixed",
        description: "Fixed sidebar with scrolling content",
        html: r#"<div class="sidebar-layout">
  <aside class="sidebar">Sidebar</aside>
  <main class="content">Main Content</main>
</div>"#,
        css: r#".sidebar-layout {
  display: flex;
  min-height: 100vh;
}

.sidebar {
  width: 280px;
  position: fixed;
  top: 0;
  left: 0;
  height: 100vh;
  overflow-y: auto;
  background: #1a1a25;
  border-right: 1px solid #2a2a3a;
}

.content {
  flex: 1;
  margin-left: 280px;
  padding: 24px;
}"#,
    },
    LayoutTemplate {
        id: "card-grid",
        name: "Card Grid",
        description: "Responsive card grid using auto-fit",
        html: r#"<div class="card-grid">
  <div class="card">Card 1</div>
  <div class="card">Card 2</div>
  <div class="card">Card 3</div>
  <div class="card">Card 4</div>
</div>"#,
        css: r#".card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 24px;
  padding: 24px;
}

.card {
  background: #16161f;
  border: 1px solid #2a2a3a;
  border-radius: 16px;
  padding: 24px;
  transition: transform 0.2s, box-shadow 0.2s;
}

.card:hover {
  transform: translateY(-4px);
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
}"#,
    },
    LayoutTemplate {
        id: "masonry",
        name: "Masonry",
        description: "Pinterest-style column layout",
        html: r#"<div class="masonry">
  <div class="masonry-item">Item 1</div>
  <div class="masonry-item">Item 2</div>
  <div class="masonry-item">Item 3</div>
</div>"#,
        css: r#".masonry {
  columns: 3;
  column-gap: 24px;
  padding: 24px;
}

.masonry-item {
  break-inside: avoid;
  margin-bottom: 24px;
  background: #16161f;
  border-radius: 16px;
  padding: 24px;
}

/* Alternative using CSS Grid */
.masonry-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  grid-auto-rows: 10px;
  gap: 16px;
}

.masonry-grid-item {
  /* Set grid-row-end from script */
}"#,
    },
    LayoutTemplate {
        id: "split-screen",
        name: "Split Screen",
        description: "Screen split into two equal columns",
        html: r#"<div class="split-screen">
  <div class="split-left">
    <h1>Left Content</h1>
  </div>
  <div class="split-right">
    <h1>Right Content</h1>
  </div>
</div>"#,
        css: r#".split-screen {
  display: flex;
  min-height: 100vh;
}

.split-left,
.split-right {
  flex: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 48px;
}

.split-left {
  background: linear-gradient(135deg, #3b82f6, #8b5cf6);
}

.split-right {
  background: #0a0a0f;
}"#,
    },
    LayoutTemplate {
        id: "centered",
        name: "Centered Content",
        description: "Content centred both vertically and horizontally",
        html: r#"<div class="centered-container">
  <div class="centered-content">
    <h1>Perfectly Centered</h1>
    <p>This content is centered both ways.</p>
  </div>
</div>"#,
        css: r#".centered-container {
  display: grid;
  place-items: center;
  min-height: 100vh;
  padding: 24px;
}

.centered-content {
  max-width: 600px;
  text-align: center;
}

/* Alternative using Flexbox */
.centered-flex {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
}"#,
    },
    LayoutTemplate {
        id: "sticky-footer",
        name: "Sticky Footer",
        description: "Footer that always stays at the bottom of the page",
        html: r#"<div class="sticky-footer-container">
  <header>Header</header>
  <main>Main Content</main>
  <footer>Footer</footer>
</div>"#,
        css: r#".sticky-footer-container {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

main {
  flex: 1;
  padding: 24px;
}

footer {
  padding: 24px;
  background: #12121a;
  border-top: 1px solid #2a2a3a;
}"#,
    },
    LayoutTemplate {
        id: "dashboard",
        name: "Dashboard",
        description: "Dashboard layout with header and sidebar",
        html: r#"<div class="dashboard">
  <header class="dashboard-header">Header</header>
  <aside class="dashboard-sidebar">Sidebar</aside>
  <main class="dashboard-main">
    <div class="dashboard-grid">
      <div class="widget">Widget 1</div>
      <div class="widget">Widget 2</div>
      <div class="widget">Widget 3</div>
    </div>
  </main>
</div>"#,
        css: r#".dashboard {
  display: grid;
  grid-template-areas:
    "header header"
    "sidebar main";
  grid-template-columns: 280px 1fr;
  grid-template-rows: 64px 1fr;
  min-height: 100vh;
}

.dashboard-header {
  grid-area: header;
  background: #12121a;
  border-bottom: 1px solid #2a2a3a;
  display: flex;
  align-items: center;
  padding: 0 24px;
}

.dashboard-sidebar {
  grid-area: sidebar;
  background: #12121a;
  border-right: 1px solid #2a2a3a;
  padding: 24px;
}

.dashboard-main {
  grid-area: main;
  padding: 24px;
  overflow-y: auto;
}

.dashboard-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 24px;
}"#,
    },
];

/// Look a template up by id
pub fn find_template(id: &str) -> Option<&'static LayoutTemplate> {
    let id = id.trim();
    TEMPLATES.iter().find(|t| t.id.eq_ignore_ascii_case(id))
}

/// Input events for the layout gallery
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutAction {
    /// Select a template by id
    Select(String),
}

/// Layout gallery state
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutsState {
    selected: &'static LayoutTemplate,
}

impl Default for LayoutsState {
    fn default() -> Self {
        Self {
            selected: &TEMPLATES[0],
        }
    }
}

impl LayoutsState {
    pub fn selected(&self) -> &'static LayoutTemplate {
        self.selected
    }
}

impl Editor for LayoutsState {
    type Action = LayoutAction;

    fn reduce(&self, action: LayoutAction) -> Result<Self, EditorError> {
        match action {
            LayoutAction::Select(id) => find_template(&id)
                .map(|selected| Self { selected })
                .ok_or(EditorError::UnknownTemplate(id)),
        }
    }

    /// Templates carry their own stylesheet, there is no preview element to style
    fn derive_style(&self) -> Style {
        Style::new()
    }

    fn derive_code(&self) -> GeneratedCode {
        GeneratedCode::with_html(self.selected.css, self.selected.html)
    }
}
