//! In-memory content source

use std::cell::RefCell;

use ratatui::text::Line;

use super::ContentSource;

/// One section of rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub header: Option<String>,
    pub items: Vec<String>,
}

impl Section {
    pub fn new(header: Option<&str>, items: Vec<String>) -> Self {
        Self {
            header: header.map(str::to_string),
            items,
        }
    }
}

/// Sections of plain-text rows, mutable through a shared reference
///
/// Widgets hold their content through `Rc<dyn ContentSource>`, so the
/// owner mutates it in place and then reloads the widget.
#[derive(Debug, Default)]
pub struct SectionedItems {
    sections: RefCell<Vec<Section>>,
    reports_sections: bool,
}

impl SectionedItems {
    /// Content that reports its section count
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections: RefCell::new(sections),
            reports_sections: true,
        }
    }

    /// A single unnamed section that does not report a section count
    pub fn flat(items: Vec<String>) -> Self {
        Self {
            sections: RefCell::new(vec![Section::new(None, items)]),
            reports_sections: false,
        }
    }

    pub fn set_sections(&self, sections: Vec<Section>) {
        *self.sections.borrow_mut() = sections;
    }

    /// Append an item, creating sections up to `section` if needed
    ///
    /// Flat content only ever has its first section, so every push lands there.
    pub fn push(&self, section: usize, item: impl Into<String>) {
        let section = if self.reports_sections { section } else { 0 };
        let mut sections = self.sections.borrow_mut();
        if sections.len() <= section {
            sections.resize_with(section + 1, Section::default);
        }
        sections[section].items.push(item.into());
    }

    /// Remove the last item of the last non-empty section
    pub fn pop(&self) -> Option<String> {
        let mut sections = self.sections.borrow_mut();
        sections
            .iter_mut()
            .rev()
            .find(|section| !section.items.is_empty())
            .and_then(|section| section.items.pop())
    }

    /// Remove every item, keeping the sections
    pub fn clear(&self) {
        for section in self.sections.borrow_mut().iter_mut() {
            section.items.clear();
        }
    }

    pub fn total(&self) -> usize {
        self.sections
            .borrow()
            .iter()
            .map(|section| section.items.len())
            .sum()
    }
}

impl ContentSource for SectionedItems {
    fn number_of_sections(&self) -> Option<usize> {
        self.reports_sections.then(|| self.sections.borrow().len())
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.sections
            .borrow()
            .get(section)
            .map_or(0, |section| section.items.len())
    }

    fn item(&self, section: usize, index: usize) -> Option<Line<'static>> {
        self.sections
            .borrow()
            .get(section)
            .and_then(|section| section.items.get(index))
            .map(|item| Line::from(item.clone()))
    }

    fn section_header(&self, section: usize) -> Option<Line<'static>> {
        self.sections
            .borrow()
            .get(section)
            .and_then(|section| section.header.clone())
            .map(Line::from)
    }
}
