//! Kernel tour — runs the same reads over both point representations.
//!
//! Usage:
//! ```text
//! cargo run --example kernel_tour
//! ```

use geokernel::cartesian::{self, Cartesian};
use geokernel::homogeneous::{self, Homogeneous};
use geokernel::{Kernel, KernelError, Point3Ops};
use num_rational::Ratio;
use num_traits::{One, Zero};

fn centroid_x<K: Kernel>(points: &[K::Point3]) -> K::FT {
    let mut sum = K::FT::zero();
    let mut count = K::FT::zero();
    for p in points {
        sum += p.x();
        count += K::FT::one();
    }
    sum / count
}

fn main() -> Result<(), KernelError> {
    // Default: WARN for everything, INFO for geokernel.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geokernel=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("kernel_tour=info".parse().unwrap_or_default())
        .add_directive("geokernel=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Cartesian points over f64: reads are the stored fields.
    let p = cartesian::Point3::new(1.0, 2.0, 3.0);
    let copy = p.clone();
    println!(
        "cartesian p = ({}, {}, {}), hw = {}",
        p.x(),
        p.y(),
        p.z(),
        p.hw()
    );
    println!("copy == p: {} (the copy shares p's representation)", copy == p);

    // Homogeneous points over i64: (2, 4, 2) and (1, 2, 1) are the same
    // position, and Cartesian reads stay exact rationals.
    let h = homogeneous::Point2::from_homogeneous(2_i64, 4, 2);
    let g = homogeneous::Point2::from_homogeneous(1, 2, 1);
    println!("h == g: {}", h == g);
    println!("h.x() = {}, h.hw() = {}", h.x(), h.hw());

    // A fractional position stored exactly: x = 2/3, y = 1/2.
    let e = homogeneous::Point2::<i64>::new(Ratio::new(2, 3), Ratio::new(1, 2));
    println!(
        "e = ({}, {}) stored as ({}, {}, {})",
        e.x(),
        e.y(),
        e.hx(),
        e.hy(),
        e.hw()
    );

    // Translation by 1/2 along x without dividing: the weight carries it.
    let t = homogeneous::Transform3::translation(&homogeneous::Vector3::new(1_i64, 0, 0, 2));
    let q = homogeneous::Point3::from_homogeneous(0_i64, 0, 0, 1).transform(&t);
    println!(
        "shifted: ({}, {}, {}) with weight {}",
        q.x(),
        q.y(),
        q.z(),
        q.hw()
    );

    // Ideal points exist but have no Cartesian image.
    let ideal = homogeneous::Point3::from_homogeneous(1_i64, 0, 0, 0);
    println!("ideal converts to: {:?}", ideal.to_cartesian().err());

    // The same generic code runs over either kernel.
    let floats = [
        cartesian::Point3::new(0.0, 0.0, 0.0),
        cartesian::Point3::new(3.0, 0.0, 0.0),
    ];
    let exact = [
        homogeneous::Point3::from_homogeneous(1_i64, 0, 0, 2),
        homogeneous::Point3::from_homogeneous(3, 0, 0, 2),
    ];
    println!("centroid x over f64: {}", centroid_x::<Cartesian<f64>>(&floats));
    println!(
        "centroid x over exact i64: {}",
        centroid_x::<Homogeneous<i64>>(&exact)
    );

    // And the weighted point converts into the Cartesian kernel.
    let c = q.to_cartesian()?;
    println!("converted: ({}, {}, {})", c.x(), c.y(), c.z());

    Ok(())
}
