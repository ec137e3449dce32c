/// All localized user-facing strings for a language
///
/// Field names double as the UI keys that labeled elements refer to, so
/// `lookup("lbl_fname")` and `.lbl_fname` always agree.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Page Header ====================
    pub title: &'static str,
    pub subtitle: &'static str,

    // ==================== Sections ====================
    pub sec_patient: &'static str,
    pub sec_insurance: &'static str,
    pub sec_history: &'static str,

    // ==================== Field Labels ====================
    pub lbl_fname: &'static str,
    pub lbl_lname: &'static str,
    pub lbl_dob: &'static str,
    pub lbl_phone: &'static str,
    pub lbl_email: &'static str,
    pub lbl_address: &'static str,
    pub lbl_emergency: &'static str,
    pub lbl_provider: &'static str,
    pub lbl_policy: &'static str,
    pub lbl_reason: &'static str,
    pub lbl_meds: &'static str,
    pub lbl_allergies: &'static str,

    // ==================== Placeholders ====================
    pub ph_fname: &'static str,
    pub ph_lname: &'static str,
    pub ph_policy: &'static str,
    pub ph_reason: &'static str,
    pub ph_meds: &'static str,
    pub ph_allergies: &'static str,

    // ==================== Condition Checkboxes ====================
    pub chk_diabetes: &'static str,
    pub chk_hyp: &'static str,
    pub chk_asthma: &'static str,

    // ==================== Controls ====================
    pub btn_submit: &'static str,
    pub btn_demo: &'static str,

    /// Submit button label while a submission is in flight
    pub loading: &'static str,

    /// Label of the language toggle. Names the *other* language, since the
    /// control means "switch to".
    pub toggle_label: &'static str,

    // ==================== Messages ====================
    /// Generic error shown for validation and server-side failures
    pub msg_error: &'static str,

    /// Shown instead of `msg_error` when the service could not be reached
    pub msg_connect_error: &'static str,

    /// Appended to "<server message><timestamp>" after a successful submission.
    /// Starts with a space.
    pub success_suffix: &'static str,

    pub demo_loaded: &'static str,

    // ==================== Result Panel ====================
    pub panel_title: &'static str,
    pub panel_close: &'static str,
    pub panel_patient_id: &'static str,
    pub panel_resources: &'static str,
    pub panel_view_json: &'static str,
    pub panel_download: &'static str,
}

/// Keys of every labeled text element on the page, in page order.
///
/// The submit button is not listed: its label depends on whether a
/// submission is in flight and is rendered by the page itself.
pub const TEXT_KEYS: &[&str] = &[
    "title",
    "subtitle",
    "sec_patient",
    "lbl_fname",
    "lbl_lname",
    "lbl_dob",
    "lbl_phone",
    "lbl_email",
    "lbl_address",
    "lbl_emergency",
    "sec_insurance",
    "lbl_provider",
    "lbl_policy",
    "lbl_reason",
    "sec_history",
    "lbl_meds",
    "lbl_allergies",
    "chk_diabetes",
    "chk_hyp",
    "chk_asthma",
    "btn_demo",
];

/// Keys of every labeled placeholder, in page order.
pub const PLACEHOLDER_KEYS: &[&str] = &[
    "ph_fname",
    "ph_lname",
    "ph_policy",
    "ph_reason",
    "ph_meds",
    "ph_allergies",
];

impl LanguageStrings {
    /// Look a string up by its UI key.
    ///
    /// Returns `None` for unknown keys; callers keep whatever text the
    /// element already shows in that case.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        let text = match key {
            "title" => self.title,
            "subtitle" => self.subtitle,
            "sec_patient" => self.sec_patient,
            "sec_insurance" => self.sec_insurance,
            "sec_history" => self.sec_history,
            "lbl_fname" => self.lbl_fname,
            "lbl_lname" => self.lbl_lname,
            "lbl_dob" => self.lbl_dob,
            "lbl_phone" => self.lbl_phone,
            "lbl_email" => self.lbl_email,
            "lbl_address" => self.lbl_address,
            "lbl_emergency" => self.lbl_emergency,
            "lbl_provider" => self.lbl_provider,
            "lbl_policy" => self.lbl_policy,
            "lbl_reason" => self.lbl_reason,
            "lbl_meds" => self.lbl_meds,
            "lbl_allergies" => self.lbl_allergies,
            "ph_fname" => self.ph_fname,
            "ph_lname" => self.ph_lname,
            "ph_policy" => self.ph_policy,
            "ph_reason" => self.ph_reason,
            "ph_meds" => self.ph_meds,
            "ph_allergies" => self.ph_allergies,
            "chk_diabetes" => self.chk_diabetes,
            "chk_hyp" => self.chk_hyp,
            "chk_asthma" => self.chk_asthma,
            "btn_submit" => self.btn_submit,
            "btn_demo" => self.btn_demo,
            "loading" => self.loading,
            "toggle_label" => self.toggle_label,
            "msg_error" => self.msg_error,
            "msg_connect_error" => self.msg_connect_error,
            "success_suffix" => self.success_suffix,
            "demo_loaded" => self.demo_loaded,
            "panel_title" => self.panel_title,
            "panel_close" => self.panel_close,
            "panel_patient_id" => self.panel_patient_id,
            "panel_resources" => self.panel_resources,
            "panel_view_json" => self.panel_view_json,
            "panel_download" => self.panel_download,
            _ => return None,
        };
        Some(text)
    }
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    title: "Patient Intake Form",
    subtitle: "Secure Healthcare Portal - FHIR Compliant",

    sec_patient: "Patient Information",
    sec_insurance: "Insurance & Visit Details",
    sec_history: "Health History",

    lbl_fname: "First Name",
    lbl_lname: "Last Name",
    lbl_dob: "Date of Birth",
    lbl_phone: "Phone Number",
    lbl_email: "Email Address",
    lbl_address: "Home Address",
    lbl_emergency: "Emergency Contact",
    lbl_provider: "Insurance Provider",
    lbl_policy: "Policy Number",
    lbl_reason: "Reason for Visit",
    lbl_meds: "Current Medications",
    lbl_allergies: "Allergies",

    ph_fname: "Jane",
    ph_lname: "Doe",
    ph_policy: "e.g. XY-123456",
    ph_reason: "Briefly describe your symptoms...",
    ph_meds: "List dosage and frequency...",
    ph_allergies: "Food, latex, or seasonal...",

    chk_diabetes: "Diabetes",
    chk_hyp: "Hypertension",
    chk_asthma: "Asthma",

    btn_submit: "Submit Intake",
    btn_demo: "Load Demo Data",
    loading: "Processing...",
    toggle_label: "Español",

    msg_error: "Please correct the errors highlighted in orange.",
    msg_connect_error: "Cannot connect to server. Please try again later.",
    success_suffix: " FHIR resources created successfully.",
    demo_loaded: "Demo data loaded successfully!",

    panel_title: "FHIR Resources Generated",
    panel_close: "Close",
    panel_patient_id: "Patient ID",
    panel_resources: "Resources Created",
    panel_view_json: "View JSON",
    panel_download: "Download FHIR Bundle",
};

// ==================== Spanish Strings ====================

/// Spanish language strings
pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    title: "Formulario de Admisión",
    subtitle: "Portal de Salud Seguro - Compatible con FHIR",

    sec_patient: "Información del Paciente",
    sec_insurance: "Seguro y Detalles de Visita",
    sec_history: "Historial Médico",

    lbl_fname: "Nombre",
    lbl_lname: "Apellido",
    lbl_dob: "Fecha de Nacimiento",
    lbl_phone: "Número de Teléfono",
    lbl_email: "Correo Electrónico",
    lbl_address: "Dirección Domiciliaria",
    lbl_emergency: "Contacto de Emergencia",
    lbl_provider: "Proveedor de Seguro",
    lbl_policy: "Número de Póliza",
    lbl_reason: "Razón de la Visita",
    lbl_meds: "Medicamentos Actuales",
    lbl_allergies: "Alergias",

    ph_fname: "Juan",
    ph_lname: "Pérez",
    ph_policy: "ej. XY-123456",
    ph_reason: "Describa brevemente sus síntomas...",
    ph_meds: "Indique dosis y frecuencia...",
    ph_allergies: "Alimentos, látex o estacionales...",

    chk_diabetes: "Diabetes",
    chk_hyp: "Hipertensión",
    chk_asthma: "Asma",

    btn_submit: "Enviar Formulario",
    btn_demo: "Cargar Datos de Prueba",
    loading: "Procesando...",
    toggle_label: "English",

    msg_error: "Por favor corrija los errores marcados en naranja.",
    msg_connect_error: "No se puede conectar al servidor. Inténtelo de nuevo más tarde.",
    success_suffix: " Recursos FHIR creados exitosamente.",
    demo_loaded: "¡Datos de prueba cargados exitosamente!",

    panel_title: "Recursos FHIR Generados",
    panel_close: "Cerrar",
    panel_patient_id: "ID del Paciente",
    panel_resources: "Recursos Creados",
    panel_view_json: "Ver JSON",
    panel_download: "Descargar Bundle FHIR",
};
