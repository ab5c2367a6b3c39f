//! Mock data providers. The backing services are not part of this
//! repository; these stubs hold canned data behind the real trait seams.

/// A preset focus-mode configuration the student can start a session with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSession {
    pub name: &'static str,
    pub duration_min: u32,
    pub break_min: u32,
}

pub trait FocusApi {
    fn sessions(&self) -> &[FocusSession];
    fn current(&self) -> Option<&FocusSession>;
}

pub struct MockFocusApi {
    sessions: Vec<FocusSession>,
    current: Option<usize>,
}

impl MockFocusApi {
    pub fn new() -> MockFocusApi {
        MockFocusApi {
            sessions: vec![
                FocusSession {
                    name: "Pomodoro corto",
                    duration_min: 25,
                    break_min: 5,
                },
                FocusSession {
                    name: "Pomodoro largo",
                    duration_min: 50,
                    break_min: 10,
                },
                FocusSession {
                    name: "Examen",
                    duration_min: 120,
                    break_min: 0,
                },
            ],
            current: Some(0),
        }
    }
}

impl Default for MockFocusApi {
    fn default() -> Self {
        MockFocusApi::new()
    }
}

impl FocusApi for MockFocusApi {
    fn sessions(&self) -> &[FocusSession] {
        &self.sessions
    }

    fn current(&self) -> Option<&FocusSession> {
        self.current.map(|i| &self.sessions[i])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub degree: &'static str,
    pub courses: Vec<&'static str>,
}

pub trait PerfilApi {
    fn profile(&self) -> &Profile;
}

pub struct MockPerfilApi {
    profile: Profile,
}

impl MockPerfilApi {
    pub fn new() -> MockPerfilApi {
        MockPerfilApi {
            profile: Profile {
                name: "Estudiante UGR",
                degree: "Grado en Ingeniería Informática",
                courses: vec![
                    "Metodologías de Desarrollo Ágil",
                    "Sistemas Operativos",
                    "Bases de Datos",
                ],
            },
        }
    }
}

impl Default for MockPerfilApi {
    fn default() -> Self {
        MockPerfilApi::new()
    }
}

impl PerfilApi for MockPerfilApi {
    fn profile(&self) -> &Profile {
        &self.profile
    }
}
