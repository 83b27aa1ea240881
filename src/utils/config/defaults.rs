use std::path::PathBuf;

use crate::launcher::Action;

pub struct WindowDefaults;
impl WindowDefaults {
    pub fn title() -> String {
        String::from("Face Recognition Attendance System")
    }
    pub fn heading() -> String {
        String::from("Face Recognition\nAttendance System")
    }
    pub fn width() -> i32 {
        800
    }
    pub fn height() -> i32 {
        900
    }
}

pub struct PaletteDefaults;
impl PaletteDefaults {
    pub fn primary_blue() -> String {
        String::from("#0000FF")
    }
    pub fn white() -> String {
        String::from("#FFFFFF")
    }
    pub fn navy_blue() -> String {
        String::from("#000080")
    }
    pub fn background() -> String {
        String::from("#F0F0F0")
    }
    pub fn hover() -> String {
        String::from("#0000FF")
    }
}

pub struct FileDefaults;
impl FileDefaults {
    pub fn logo() -> PathBuf {
        PathBuf::from("isi.png")
    }
    pub fn interpreter() -> PathBuf {
        PathBuf::from("python3")
    }
}

pub struct OtherDefaults;
impl OtherDefaults {
    pub fn bool_true() -> bool {
        true
    }
    pub fn logo_size() -> i32 {
        200
    }
    pub fn log_level() -> String {
        String::from("info")
    }
    pub fn actions() -> Vec<Action> {
        vec![
            Action::new(
                "Capture Faces",
                "get_faces_from_camera_tkinter.py",
                "Open camera to capture faces for registration",
            ),
            Action::new(
                "Extract Features",
                "features_extraction_to_csv.py",
                "Extract facial features and save to CSV",
            ),
            Action::new(
                "Take Attendance",
                "attendance_taker.py",
                "Run face recognition and mark attendance",
            ),
            Action::new(
                "Web Interface",
                "app.py",
                "Open web-based interface for attendance",
            ),
        ]
    }
}
