/// Page non-POST requests to the contact endpoint are redirected to.
pub struct LandingPage(pub String);

/// Whether failed sends include the raw transport diagnostic in their response.
#[derive(Clone, Copy)]
pub struct ExposeDiagnostics(pub bool);
