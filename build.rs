fn main() {
    #[cfg(windows)]
    {
        if std::path::Path::new("assets/icons/rose.ico").exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/icons/rose.ico");
            if let Err(e) = res.compile() {
                println!("cargo:warning=failed to embed rose.ico: {}", e);
            }
        } else {
            println!("cargo:warning=rose.ico not found, skipping icon embedding");
        }
    }
}
