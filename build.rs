#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // L'icona è opzionale: senza res/rattendview.ico si compila comunque
    if !std::path::Path::new("res/rattendview.ico").exists() {
        return;
    }

    let mut res = WindowsResource::new();
    res.set_icon("res/rattendview.ico")
        .set("FileDescription", "rAttendview CLI")
        .set("ProductName", "rAttendview")
        .set("OriginalFilename", "rattendview.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
