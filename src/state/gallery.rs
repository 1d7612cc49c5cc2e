use thiserror::Error;

use crate::content::{self, Project};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    #[error("no project with id {0}")]
    UnknownProject(u32),
}

/// Where a click inside the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed overlay around the content.
    Background,
    CloseButton,
    /// Anything inside the content panel.
    Content,
}

/// The project whose modal is open, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectGallery {
    selected: Option<&'static Project>,
}

impl ProjectGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &'static [Project] {
        content::projects()
    }

    /// Opens the modal for `id`. Unknown ids leave the current selection as it was.
    pub fn select_project(&mut self, id: u32) -> Result<&'static Project, GalleryError> {
        let project = content::find_project(id).ok_or(GalleryError::UnknownProject(id))?;
        self.selected = Some(project);
        Ok(project)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.selected
    }

    pub fn overlay_visible(&self) -> bool {
        self.selected.is_some()
    }

    /// Returns whether the click closed the modal.
    pub fn handle_modal_click(&mut self, target: ModalClick) -> bool {
        match target {
            ModalClick::Background | ModalClick::CloseButton => {
                let was_open = self.overlay_visible();
                self.clear();
                was_open
            }
            ModalClick::Content => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::projects;

    #[test]
    fn test_select_then_clear() {
        let mut gallery = ProjectGallery::new();
        assert!(!gallery.overlay_visible());

        let project = gallery.select_project(2).expect("project 2 exists");
        assert_eq!(project.id, 2);
        assert!(gallery.overlay_visible());
        assert_eq!(gallery.selected().map(|p| p.id), Some(2));

        gallery.clear();
        assert!(gallery.selected().is_none());
        assert!(!gallery.overlay_visible());
    }

    #[test]
    fn test_selection_comes_from_content_store() {
        let mut gallery = ProjectGallery::new();
        assert_eq!(gallery.projects(), projects());
        for project in projects() {
            let selected = gallery.select_project(project.id).expect("listed project");
            assert!(std::ptr::eq(selected, project));
            assert!(std::ptr::eq(
                selected,
                crate::content::find_project(project.id).expect("listed project")
            ));
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let mut gallery = ProjectGallery::new();
        assert_eq!(
            gallery.select_project(99),
            Err(GalleryError::UnknownProject(99))
        );
        assert!(gallery.selected().is_none());

        gallery.select_project(1).expect("project 1 exists");
        assert!(gallery.select_project(99).is_err());
        assert_eq!(gallery.selected().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_single_selection() {
        let mut gallery = ProjectGallery::new();
        gallery.select_project(1).expect("project 1 exists");
        gallery.select_project(3).expect("project 3 exists");
        assert_eq!(gallery.selected().map(|p| p.id), Some(3));
    }

    #[test]
    fn test_clear_is_unconditional() {
        let mut gallery = ProjectGallery::new();
        gallery.clear();
        assert!(gallery.selected().is_none());
    }

    #[test]
    fn test_content_clicks_never_close() {
        let mut gallery = ProjectGallery::new();
        assert!(!gallery.handle_modal_click(ModalClick::Content));

        for project in projects() {
            gallery.select_project(project.id).expect("listed project");
            assert!(!gallery.handle_modal_click(ModalClick::Content));
            assert_eq!(gallery.selected().map(|p| p.id), Some(project.id));
        }
    }

    #[test]
    fn test_background_and_close_button_clear() {
        let mut gallery = ProjectGallery::new();
        for target in [ModalClick::Background, ModalClick::CloseButton] {
            for project in projects() {
                gallery.select_project(project.id).expect("listed project");
                assert!(gallery.handle_modal_click(target));
                assert!(!gallery.overlay_visible());
            }
            // nothing open, still cleared
            assert!(!gallery.handle_modal_click(target));
            assert!(!gallery.overlay_visible());
        }
    }
}
