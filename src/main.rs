use anyhow::Result;
use prettytable::row;
use prettytable::Table;
use rand::SeedableRng;
use stochastic_meander::BrownianMeander;
use stochastic_meander::ProcessExt;

fn main() -> Result<()> {
  let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
  let meander = BrownianMeander::<f64>::new(Some(1.0))?;
  println!("{meander}");

  let n = 10;
  let times = meander.times(n, true)?;
  let fixed = meander.sample(&mut rng, n, Some(0.5), true)?;
  let free = meander.sample(&mut rng, n, None, true)?;

  let mut table = Table::new();
  table.add_row(row!["t", "b = 0.5", "b drawn"]);
  for i in 0..times.len() {
    table.add_row(row![
      format!("{:.2}", times[i]),
      format!("{:.4}", fixed[i]),
      format!("{:.4}", free[i])
    ]);
  }
  table.printstd();

  let irregular = [0.0, 0.05, 0.1, 0.4, 0.45, 2.0];
  let at = meander.sample_at(&mut rng, &irregular, Some(1.0))?;
  println!("custom grid {irregular:?}: {at}");

  let batch = meander.paths(1000, None, true)?.sample_par(256);
  let mut terminal = 0.0;
  for path in &batch {
    if let Some(x) = path.as_ref().ok().and_then(|p| p.last()) {
      terminal += x;
    }
  }
  println!(
    "mean terminal value over {} paths: {:.4} (theory {:.4})",
    batch.len(),
    terminal / batch.len() as f64,
    std::f64::consts::FRAC_PI_2.sqrt()
  );

  Ok(())
}
