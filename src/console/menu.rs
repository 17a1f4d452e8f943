pub const MENU: &str = "\nOptions:
1. Send close-loop mode command
2. Send open-loop mode command
3. Request robot's odometry/pose
4. Request motor status
5. Exit";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    ClosedLoop,
    OpenLoop,
    Odometry,
    MotorStatus,
    Exit,
}

impl MenuChoice {
    /// Matches the selection exactly, so `" 3"` or `"03"` are not choices.
    pub fn parse(selection: &str) -> Option<MenuChoice> {
        match selection {
            "1" => Some(MenuChoice::ClosedLoop),
            "2" => Some(MenuChoice::OpenLoop),
            "3" => Some(MenuChoice::Odometry),
            "4" => Some(MenuChoice::MotorStatus),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
