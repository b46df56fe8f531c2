fn main() {
    #[cfg(target_arch = "wasm32")]
    ui::boot::boot();

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("softlight-web targets wasm32; serve it with `trunk serve`");
}
