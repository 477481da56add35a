use crate::error::PersistenceError;
use crate::notice::Notice;
use crate::record::StoredList;
use crate::task::Task;
use crate::tracker::Views;

/// A place where the whole task list is kept between two runs of the app
pub trait TaskStorage {
    /// Returns the task list that has been saved last time, leaving out the tasks that cannot be read.
    /// A storage that has never been written to returns an empty list
    fn load(&mut self) -> Result<StoredList, PersistenceError>;
    /// Replace the stored task list with `tasks`
    fn save(&mut self, tasks: &[Task]) -> Result<(), PersistenceError>;
    /// Move the stored task list to a backup location, so that the next `save` does not overwrite it.
    /// Does nothing if nothing is stored
    fn set_aside(&mut self) -> Result<(), PersistenceError>;
}

/// Something that displays the task list, the calendar and the progress bar
pub trait Renderer {
    /// Called after every change, with freshly computed views
    fn render(&mut self, views: &Views);
    /// Display a short message to the user (e.g. a toast)
    fn notify(&mut self, notice: &Notice) {
        log::info!("{}", notice);
    }
}
