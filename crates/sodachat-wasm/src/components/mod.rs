//! DOM renderers for the three page regions. Each one redraws its region from the
//! controller state; none of them mutate conversations directly.

pub mod chat_screen;
pub mod header;
pub mod sidebar;
