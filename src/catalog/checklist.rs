//! Selectable checklist built from the tool catalog

use crate::api::Tool;

/// One row of the checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    pub name: String,
    pub description: String,
    pub checked: bool,
}

impl From<Tool> for SelectableItem {
    fn from(tool: Tool) -> Self {
        Self {
            name: tool.name,
            description: tool.description,
            checked: false,
        }
    }
}

/// Ordered checklist, one item per catalog entry, in server order
#[derive(Debug, Clone, Default)]
pub struct ToolChecklist {
    items: Vec<SelectableItem>,
}

impl ToolChecklist {
    /// Build an unchecked checklist from the catalog
    pub fn from_tools(tools: Vec<Tool>) -> Self {
        Self {
            items: tools.into_iter().map(SelectableItem::from).collect(),
        }
    }

    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip an item; returns the new state, or `None` if out of range
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    /// Set an item by tool name; returns false if no such tool
    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        match self.items.iter_mut().find(|i| i.name == name) {
            Some(item) => {
                item.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Names of checked tools, in catalog order
    pub fn selected_names(&self) -> Vec<String> {
        self.items.iter().filter(|i| i.checked).map(|i| i.name.clone()).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: usize) -> Vec<Tool> {
        (0..n)
            .map(|i| Tool::new(format!("tool{}", i), format!("Tool number {}", i)))
            .collect()
    }

    #[test]
    fn test_renders_one_item_per_tool() {
        for n in [0, 1, 5, 32] {
            let tools = catalog(n);
            let checklist = ToolChecklist::from_tools(tools.clone());
            assert_eq!(checklist.len(), n);
            for (tool, item) in tools.iter().zip(checklist.items()) {
                assert_eq!(item.name, tool.name);
                assert_eq!(item.description, tool.description);
                assert!(!item.checked);
            }
        }
    }

    #[test]
    fn test_toggle() {
        let mut checklist = ToolChecklist::from_tools(catalog(2));
        assert_eq!(checklist.toggle(1), Some(true));
        assert_eq!(checklist.toggle(1), Some(false));
        assert_eq!(checklist.toggle(2), None);
    }

    #[test]
    fn test_selected_names_in_catalog_order() {
        let mut checklist = ToolChecklist::from_tools(catalog(4));
        checklist.toggle(3);
        checklist.toggle(0);
        assert_eq!(checklist.selected_names(), vec!["tool0", "tool3"]);
        assert_eq!(checklist.selected_count(), 2);
    }

    #[test]
    fn test_set_checked_by_name() {
        let mut checklist = ToolChecklist::from_tools(vec![Tool::new("search", "Web search")]);
        assert!(checklist.set_checked("search", true));
        assert!(!checklist.set_checked("missing", true));
        assert_eq!(checklist.selected_names(), vec!["search"]);
        assert!(checklist.contains("search"));
    }

    #[test]
    fn test_empty_selection() {
        let checklist = ToolChecklist::from_tools(catalog(3));
        assert!(checklist.selected_names().is_empty());
    }
}
