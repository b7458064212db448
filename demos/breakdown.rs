use upcean::{Decoded, Ean, ParseError, Upc};

fn describe(s: &str) {
    println!("{s}:");
    match Upc::parse(s) {
        Err(e @ ParseError::InvalidCheckDigit { .. }) => println!("  typo in the UPC? {e}"),
        Err(e) => println!("  not a UPC: {e}"),
        Ok(upc) => {
            println!("  number system: {}", upc.number_system());
            println!("  check digit:   {}", upc.check_digit());
            match upc.decode() {
                Decoded::Global {
                    manufacturer,
                    product,
                } => {
                    println!("  manufacturer:  {manufacturer}");
                    println!("  product:       {product}");
                }
                Decoded::Drug { ndc } => println!("  drug code:     {ndc}"),
                Decoded::Local => println!("  intended only for local use"),
                Decoded::Coupon {
                    manufacturer,
                    family,
                    value,
                } => {
                    println!("  manufacturer:  {manufacturer}");
                    println!("  family:        {family}");
                    println!("  value:         {value}");
                }
            }
            println!("  as EAN-13:     {}", Ean::from(upc));
        }
    }
}

fn main() {
    for s in [
        "045496830434",
        "363824057361",
        "512345678900",
        "400000000008",
        "012345678919",
        "J7D-00001",
    ] {
        describe(s);
    }

    println!();
    for s in ["4549673590600", "5030938121923"] {
        match Ean::parse(s) {
            Ok(ean) => println!("{ean}: JAN = {}", ean.is_jan()),
            Err(e) => println!("{s}: {e}"),
        }
    }
}
