use std::io::Write;
use std::path::PathBuf;

/// Writes the sample phone catalog into the system temp dir and returns its
/// path.
pub fn sample_csv_path() -> PathBuf {
    let path = std::env::temp_dir().join("csv_query_demo.csv");
    let mut file = std::fs::File::create(&path).expect("cannot create demo csv");
    write!(
        file,
        "name,brand,price,rating\n\
         iphone-15-pro,apple,999,4.9\n\
         galaxy-s23-ultra,samsung,1199,4.8\n\
         redmi-note-12,xiaomi,199,4.6\n\
         poco-x5-pro,xiaomi,299,4.4\n"
    )
    .expect("cannot write demo csv");
    path
}
