mod add_task_modal;
mod category_cards;
mod filter_menu;
mod header;
mod notice_toast;
mod sidebar;
mod task_list;
mod task_list_row;

pub use add_task_modal::AddTaskModal;
pub use category_cards::CategoryCards;
pub use filter_menu::FilterMenu;
pub use header::Header;
pub use notice_toast::NoticeToast;
pub use sidebar::Sidebar;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
