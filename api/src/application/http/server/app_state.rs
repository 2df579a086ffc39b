use std::sync::Arc;

use course_library_core::application::CourseLibraryService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CourseLibraryService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CourseLibraryService) -> Self {
        Self { args, service }
    }

    pub fn root_path(&self) -> &str {
        &self.args.server.root_path
    }
}
