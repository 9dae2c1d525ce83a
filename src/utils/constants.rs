// Claves de localStorage compartidas con el resto de pestañas
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_USER_NAME: &str = "userName";
pub const STORAGE_KEY_EMAIL: &str = "email";
pub const STORAGE_KEY_USER_TYPE: &str = "userType";
pub const STORAGE_KEY_REDIRECT: &str = "redirectAfterLogin";

/// Blob serializado del propio store de sesión
pub const STORAGE_KEY_SESSION_BLOB: &str = "auth-storage";
pub const SESSION_BLOB_VERSION: u32 = 0;

/// Claves que `logout` elimina
pub const SESSION_KEYS: [&str; 4] = [
    STORAGE_KEY_TOKEN,
    STORAGE_KEY_USER_NAME,
    STORAGE_KEY_USER_TYPE,
    STORAGE_KEY_EMAIL,
];

// Rutas de la aplicación
pub const ROUTE_HOME: &str = "/";
pub const ROUTE_LOGIN: &str = "/login";
pub const ROUTE_DASHBOARD: &str = "/dashboard";
pub const ROUTE_AGENDAMENTOS: &str = "/agendamentos";
pub const ROUTE_CLIENTES: &str = "/clientes";
