fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Fall back to the vendored protoc when the host does not provide one
    if std::env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path().map_err(|e| e.to_string())?;
        std::env::set_var("PROTOC", protoc);
    }

    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);

    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .file_descriptor_set_path(out_dir.join("taskboard_descriptor.bin"))
        .compile_protos(&["proto/taskboard.proto"], &["proto"])?;
    println!("cargo:rerun-if-changed=proto/taskboard.proto");
    Ok(())
}
