cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use unix::ProbeFileImpl;
    } else if #[cfg(target_os = "windows")] {
        mod windows;
        pub use windows::ProbeFileImpl;
    } else {
        mod fallback;
        pub use fallback::ProbeFileImpl;
    }
}
