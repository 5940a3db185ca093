use uom::{
    si::{ISQ, Quantity, SI, f64::HeatTransfer},
    typenum::{N1, N3, P1, Z0},
};

/// Surface thermal transmittance `U`, W/m²·K in SI.
pub type ThermalTransmittance = HeatTransfer;

/// Linear thermal transmittance `ψ` of a thermal bridge, W/m·K in SI.
pub type LinearThermalTransmittance = Quantity<ISQ<P1, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;
