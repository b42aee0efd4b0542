use ipinfo::{Field, Ipinfo, Options};

fn main() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let ip = args.next().unwrap_or_default();

    let mut options = Options::default().debug(std::env::var_os("IPINFO_DEBUG").is_some());
    if let Ok(token) = std::env::var("IPINFO_TOKEN") {
        options = options.token(token);
    }
    let ipinfo = Ipinfo::with_options(options).map_err(|e| e.to_string())?;

    match args.next() {
        Some(name) => {
            let field: Field = name.parse().map_err(|e: ipinfo::IpinfoError| e.to_string())?;
            let value = ipinfo
                .get_specific_field(&ip, field)
                .map_err(|e| e.to_string())?;
            println!("{value}");
        }
        None => {
            let host = ipinfo.get_full_ip_details(&ip).map_err(|e| e.to_string())?;
            println!("{:#?}", host.properties());
        }
    }
    Ok(())
}
