//! Command line front end for AGR project data.
//!
//! Usage:
//!   agr-cli project create "Tverskaya 7" --select
//!   agr-cli model add
//!   agr-cli tile set-texture 001 1001 diffuse ./maps/wall_d.png
//!   agr-cli names
//!   agr-cli export-textures ./export/textures

use std::path::PathBuf;

use agr_tools_lib::config::AppConfig;
use agr_tools_lib::folders;
use agr_tools_lib::geojson::{self, thumbnail, GeoJsonData};
use agr_tools_lib::logging;
use agr_tools_lib::naming::district::DistrictCatalog;
use agr_tools_lib::naming::NameSheet;
use agr_tools_lib::preferences::Preferences;
use agr_tools_lib::presets::{GlassPresetService, UdimPreset, UdimPresetService};
use agr_tools_lib::projects::{Project, ProjectService, TextureSlot};
use agr_tools_lib::ral::{self, RalSearch};
use agr_tools_lib::texture_export;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agr-cli")]
#[command(about = "Manage AGR projects, UDIM textures and deliverable names")]
struct Cli {
    /// Folder holding projects.json and the preset files
    #[arg(long, global = true, env = "AGR_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, list and select projects
    #[command(subcommand)]
    Project(ProjectCommand),
    /// Edit the models of a project
    #[command(subcommand)]
    Model(ModelCommand),
    /// Edit single UDIM tiles
    #[command(subcommand)]
    Tile(TileCommand),
    /// UDIM texture presets
    #[command(subcommand)]
    Preset(PresetCommand),
    /// Glass material presets
    #[command(subcommand)]
    GlassPreset(GlassPresetCommand),
    /// Print every naming list of a project
    Names {
        #[command(flatten)]
        target: ProjectArg,
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Copy tile textures to an output folder under their export names
    ExportTextures {
        #[command(flatten)]
        target: ProjectArg,
        output_dir: PathBuf,
        /// Export a single model instead of all of them
        #[arg(long)]
        model: Option<String>,
    },
    /// Build and read GeoJSON metadata files
    #[command(subcommand)]
    Geojson(GeoJsonCommand),
    /// Look up RAL Classic colors
    #[command(subcommand)]
    Ral(RalCommand),
    /// Working folder skeleton
    #[command(subcommand)]
    Folders(FoldersCommand),
    /// District catalog
    #[command(subcommand)]
    District(DistrictCommand),
}

#[derive(Args)]
struct ProjectArg {
    /// Project id or name; defaults to the selected project
    #[arg(long, short)]
    project: Option<String>,
}

#[derive(Subcommand)]
enum ProjectCommand {
    List,
    Create {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Make the new project the current one
        #[arg(long)]
        select: bool,
    },
    Show {
        project: Option<String>,
    },
    Delete {
        project: String,
    },
    Clone {
        project: String,
    },
    Select {
        project: String,
    },
    /// Set the 4-digit district code; omit the code to clear it
    SetDistrict {
        #[command(flatten)]
        target: ProjectArg,
        code: Option<String>,
    },
}

#[derive(Subcommand)]
enum ModelCommand {
    Add {
        #[command(flatten)]
        target: ProjectArg,
    },
    Duplicate {
        #[command(flatten)]
        target: ProjectArg,
        /// Model index or name
        model: String,
    },
    Remove {
        #[command(flatten)]
        target: ProjectArg,
        model: String,
    },
    Rename {
        #[command(flatten)]
        target: ProjectArg,
        model: String,
        new_name: String,
    },
    /// Add a row of ten tiles on top of the grid
    AddRow {
        #[command(flatten)]
        target: ProjectArg,
        model: String,
    },
    /// Remove the top row of the grid
    RemoveRow {
        #[command(flatten)]
        target: ProjectArg,
        model: String,
    },
}

#[derive(Subcommand)]
enum TileCommand {
    /// Set one texture slot; omit the path to clear it
    SetTexture {
        #[command(flatten)]
        target: ProjectArg,
        model: String,
        udim: u32,
        /// diffuse, erm or normal
        slot: TextureSlot,
        path: Option<PathBuf>,
    },
    Rename {
        #[command(flatten)]
        target: ProjectArg,
        model: String,
        udim: u32,
        name: String,
    },
    /// Remove the name and every texture of a tile
    Clear {
        #[command(flatten)]
        target: ProjectArg,
        model: String,
        udim: u32,
    },
}

#[derive(Subcommand)]
enum PresetCommand {
    List,
    /// Save the textures of a tile as a preset
    Save {
        name: String,
        #[command(flatten)]
        target: ProjectArg,
        model: String,
        udim: u32,
    },
    /// Copy a preset's textures onto a tile
    Apply {
        preset: String,
        #[command(flatten)]
        target: ProjectArg,
        model: String,
        udim: u32,
    },
    Delete {
        preset: String,
    },
    Rename {
        preset: String,
        new_name: String,
    },
}

#[derive(Subcommand)]
enum GlassPresetCommand {
    List,
    Delete { preset: String },
}

#[derive(Subcommand)]
enum GeoJsonCommand {
    /// Write a GeoJSON document from a metadata file (as printed by `geojson parse`)
    Generate {
        input: PathBuf,
        /// Embed this image as the 256x256 thumbnail
        #[arg(long)]
        image: Option<PathBuf>,
        /// Output file; prints to stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the metadata of a GeoJSON file as JSON
    Parse { file: PathBuf },
    /// Print the export file name of a model
    FileName {
        #[command(flatten)]
        target: ProjectArg,
        model: String,
    },
}

#[derive(Subcommand)]
enum RalCommand {
    Search { query: String },
    /// Save a solid swatch PNG
    Save {
        code: String,
        folder: PathBuf,
        #[arg(long, default_value_t = ral::DEFAULT_SWATCH_SIZE)]
        size: u32,
    },
}

#[derive(Subcommand)]
enum FoldersCommand {
    Create { base: PathBuf, name: String },
}

#[derive(Subcommand)]
enum DistrictCommand {
    Search { query: String },
}

struct Session {
    config: AppConfig,
    projects: ProjectService,
    preferences: Preferences,
}

impl Session {
    fn open(config: AppConfig) -> Self {
        Self {
            projects: ProjectService::open(&config),
            preferences: Preferences::open(config.preferences_path()),
            config,
        }
    }

    /// Id of the named project, or of the selected one.
    fn project_id(&self, target: &ProjectArg) -> Result<uuid::Uuid> {
        match target.project.as_deref() {
            Some(key) => self
                .projects
                .find(key)
                .map(|p| p.id)
                .with_context(|| format!("Project '{}' not found", key)),
            None => self
                .preferences
                .current_project_id()
                .filter(|id| self.projects.get(*id).is_ok())
                .context("No project selected, use --project or `agr-cli project select`"),
        }
    }

    fn project(&self, target: &ProjectArg) -> Result<&Project> {
        Ok(self.projects.get(self.project_id(target)?)?)
    }

    fn update<R>(
        &mut self,
        target: &ProjectArg,
        mutate: impl FnOnce(&mut Project) -> agr_tools_lib::Result<R>,
    ) -> Result<R> {
        let id = self.project_id(target)?;
        Ok(self.projects.update(id, mutate)?)
    }
}

/// Accepts a model index or a model name.
fn model_index(project: &Project, model: &str) -> agr_tools_lib::Result<usize> {
    project.model_index(model).or_else(|e| match model.parse::<usize>() {
        Ok(index) if index < project.models.len() => Ok(index),
        _ => Err(e),
    })
}

fn by_name(target: Option<String>) -> ProjectArg {
    ProjectArg { project: target }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.data_dir);
    logging::init(&config)?;
    config.ensure_data_dir()?;

    let mut session = Session::open(config);

    match cli.command {
        Commands::Project(command) => project_command(&mut session, command),
        Commands::Model(command) => model_command(&mut session, command),
        Commands::Tile(command) => tile_command(&mut session, command),
        Commands::Preset(command) => preset_command(&mut session, command),
        Commands::GlassPreset(command) => glass_preset_command(&session, command),
        Commands::Names { target, json } => names(&session, &target, json),
        Commands::ExportTextures {
            target,
            output_dir,
            model,
        } => export_textures(&session, &target, output_dir, model).await,
        Commands::Geojson(command) => geojson_command(&session, command),
        Commands::Ral(command) => ral_command(command),
        Commands::Folders(FoldersCommand::Create { base, name }) => {
            if folders::create_project_structure(&base, &name)? {
                println!("Created {}", folders::project_path(&base, &name).display());
            } else {
                println!("Folder {} already exists", folders::project_path(&base, &name).display());
            }
            Ok(())
        }
        Commands::District(DistrictCommand::Search { query }) => {
            let catalog = DistrictCatalog::load(&session.config.districts_path())?;
            if catalog.all().is_empty() {
                println!("No districts in {}", session.config.districts_path().display());
            }
            for district in catalog.search(&query) {
                println!("{}", district);
            }
            Ok(())
        }
    }
}

fn print_project(project: &Project) {
    println!("{} ({})", project.name, project.id);
    if !project.description.is_empty() {
        println!("  {}", project.description);
    }
    println!("  District: {}", project.district().unwrap_or("-"));
    println!("  Modified: {}", project.modified_date.format("%Y-%m-%d %H:%M"));
    for (index, model) in project.models.iter().enumerate() {
        println!("  [{}] {}", index, model.name);
        for row in &model.udim_rows {
            let tiles: Vec<String> = row
                .iter()
                .map(|tile| {
                    let flags: String = TextureSlot::ALL
                        .iter()
                        .map(|slot| if tile.path(*slot).is_some() { &slot.channel()[..1] } else { "-" })
                        .collect();
                    format!("{}:{}", tile.udim_number, flags)
                })
                .collect();
            println!("      {}", tiles.join(" "));
        }
    }
}

fn project_command(session: &mut Session, command: ProjectCommand) -> Result<()> {
    match command {
        ProjectCommand::List => {
            let current = session.preferences.current_project_id();
            for project in session.projects.list() {
                let marker = if Some(project.id) == current { "*" } else { " " };
                println!(
                    "{} {}  {}  ({} models, modified {})",
                    marker,
                    project.id,
                    project.name,
                    project.models.len(),
                    project.modified_date.format("%Y-%m-%d %H:%M")
                );
            }
        }
        ProjectCommand::Create {
            name,
            description,
            select,
        } => {
            let id = session.projects.add(Project::new(name).with_description(description));
            if select {
                session.preferences.set_current_project(Some(id))?;
            }
            println!("{}", id);
        }
        ProjectCommand::Show { project } => print_project(session.project(&by_name(project))?),
        ProjectCommand::Delete { project } => {
            let id = session.project_id(&by_name(Some(project)))?;
            let removed = session.projects.delete(id)?;
            if session.preferences.current_project_id() == Some(id) {
                session.preferences.set_current_project(None)?;
            }
            println!("Deleted {}", removed.name);
        }
        ProjectCommand::Clone { project } => {
            let id = session.project_id(&by_name(Some(project)))?;
            println!("{}", session.projects.clone_project(id)?);
        }
        ProjectCommand::Select { project } => {
            let id = session.project_id(&by_name(Some(project)))?;
            session.preferences.set_current_project(Some(id))?;
        }
        ProjectCommand::SetDistrict { target, code } => {
            let code = code.unwrap_or_default();
            let catalog = DistrictCatalog::load(&session.config.districts_path())?;
            if !code.is_empty() && !catalog.all().is_empty() && catalog.find(&code).is_none() {
                tracing::warn!(%code, "district code not in catalog");
            }
            session.update(&target, |p| {
                p.district_code = code;
                Ok(())
            })?;
        }
    }
    Ok(())
}

fn model_command(session: &mut Session, command: ModelCommand) -> Result<()> {
    match command {
        ModelCommand::Add { target } => {
            let name = session.update(&target, |p| {
                let index = p.add_model();
                Ok(p.models[index].name.clone())
            })?;
            println!("Added {}", name);
        }
        ModelCommand::Duplicate { target, model } => {
            let name = session.update(&target, |p| {
                let index = p.duplicate_model(model_index(p, &model)?)?;
                Ok(p.models[index].name.clone())
            })?;
            println!("Added {}", name);
        }
        ModelCommand::Remove { target, model } => {
            let removed = session.update(&target, |p| p.remove_model(model_index(p, &model)?))?;
            println!("Removed {}", removed.name);
        }
        ModelCommand::Rename {
            target,
            model,
            new_name,
        } => session.update(&target, |p| p.rename_model(model_index(p, &model)?, new_name))?,
        ModelCommand::AddRow { target, model } => session.update(&target, |p| {
            let index = model_index(p, &model)?;
            p.model_mut(index)?.add_row();
            Ok(())
        })?,
        ModelCommand::RemoveRow { target, model } => session.update(&target, |p| {
            let index = model_index(p, &model)?;
            p.model_mut(index)?.remove_top_row()
        })?,
    }
    Ok(())
}

fn tile_command(session: &mut Session, command: TileCommand) -> Result<()> {
    match command {
        TileCommand::SetTexture {
            target,
            model,
            udim,
            slot,
            path,
        } => {
            if let Some(path) = path.as_ref().filter(|p| !p.is_file()) {
                tracing::warn!(path = %path.display(), "texture file does not exist");
            }
            let path = path.map(|p| p.display().to_string());
            session.update(&target, |p| {
                let index = model_index(p, &model)?;
                p.model_mut(index)?.tile_mut(udim)?.set_path(slot, path);
                Ok(())
            })?;
        }
        TileCommand::Rename {
            target,
            model,
            udim,
            name,
        } => session.update(&target, |p| {
            let index = model_index(p, &model)?;
            p.model_mut(index)?.tile_mut(udim)?.name = name;
            Ok(())
        })?,
        TileCommand::Clear { target, model, udim } => session.update(&target, |p| {
            let index = model_index(p, &model)?;
            p.model_mut(index)?.tile_mut(udim)?.clear();
            Ok(())
        })?,
    }
    Ok(())
}

fn preset_command(session: &mut Session, command: PresetCommand) -> Result<()> {
    let mut presets = UdimPresetService::open(&session.config);
    match command {
        PresetCommand::List => {
            for preset in presets.list() {
                println!(
                    "{}  {}  D:{} E:{} N:{}",
                    preset.id,
                    preset.name,
                    preset.diffuse_path.as_deref().unwrap_or("-"),
                    preset.erm_path.as_deref().unwrap_or("-"),
                    preset.normal_path.as_deref().unwrap_or("-")
                );
            }
        }
        PresetCommand::Save {
            name,
            target,
            model,
            udim,
        } => {
            let project = session.project(&target)?;
            let tile = project
                .model(model_index(project, &model)?)?
                .tile(udim)
                .with_context(|| format!("Tile {} not found", udim))?;
            println!("{}", presets.add(UdimPreset::from_tile(name, tile)));
        }
        PresetCommand::Apply {
            preset,
            target,
            model,
            udim,
        } => {
            let id = presets
                .find(&preset)
                .map(|p| p.id)
                .with_context(|| format!("Preset '{}' not found", preset))?;
            session.update(&target, |p| {
                let index = model_index(p, &model)?;
                presets.apply(id, p.model_mut(index)?.tile_mut(udim)?)
            })?;
        }
        PresetCommand::Delete { preset } => {
            let id = presets
                .find(&preset)
                .map(|p| p.id)
                .with_context(|| format!("Preset '{}' not found", preset))?;
            presets.delete(id)?;
        }
        PresetCommand::Rename { preset, new_name } => {
            let id = presets
                .find(&preset)
                .map(|p| p.id)
                .with_context(|| format!("Preset '{}' not found", preset))?;
            presets.rename(id, new_name)?;
        }
    }
    Ok(())
}

fn glass_preset_command(session: &Session, command: GlassPresetCommand) -> Result<()> {
    let mut presets = GlassPresetService::open(&session.config);
    match command {
        GlassPresetCommand::List => {
            for preset in presets.list() {
                println!("{}  {}", preset.id, preset.to_material(preset.name.clone()));
            }
        }
        GlassPresetCommand::Delete { preset } => {
            let id = presets
                .find(&preset)
                .map(|p| p.id)
                .with_context(|| format!("Glass preset '{}' not found", preset))?;
            presets.delete(id)?;
        }
    }
    Ok(())
}

fn names(session: &Session, target: &ProjectArg, json: bool) -> Result<()> {
    let sheet = NameSheet::for_project(session.project(target)?);
    if json {
        println!("{}", serde_json::to_string_pretty(&sheet)?);
        return Ok(());
    }
    for (title, names) in sheet.sections() {
        println!("{}", title);
        for name in names {
            println!("  {}", name);
        }
    }
    Ok(())
}

async fn export_textures(
    session: &Session,
    target: &ProjectArg,
    output_dir: PathBuf,
    model: Option<String>,
) -> Result<()> {
    let project = session.project(target)?;
    let count = match model {
        Some(model) => {
            let index = model_index(project, &model)?;
            texture_export::export_model(project, index, &output_dir).await?
        }
        None => texture_export::export_all_models(project, &output_dir).await?,
    };
    println!("Exported {} textures to {}", count, output_dir.display());
    Ok(())
}

fn geojson_command(session: &Session, command: GeoJsonCommand) -> Result<()> {
    match command {
        GeoJsonCommand::Generate {
            input,
            image,
            output,
        } => {
            let mut data: GeoJsonData = serde_json::from_str(&geojson::load_from_file(&input)?)
                .with_context(|| format!("Invalid metadata file {}", input.display()))?;
            data.validate_glasses()?;
            if let Some(image) = image {
                data.image_base64 = Some(thumbnail::image_to_base64(&image)?);
            }
            let document = geojson::generate(&data);
            match output {
                Some(path) => geojson::export_to_file(&document, &path)?,
                None => println!("{}", document),
            }
        }
        GeoJsonCommand::Parse { file } => {
            let data = geojson::parse(&geojson::load_from_file(&file)?)?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        GeoJsonCommand::FileName { target, model } => {
            let project = session.project(&target)?;
            let model = &project.models[model_index(project, &model)?];
            println!(
                "{}",
                geojson::file_name(&project.name, &model.name, project.needs_model_suffix())
            );
        }
    }
    Ok(())
}

fn ral_command(command: RalCommand) -> Result<()> {
    match command {
        RalCommand::Search { query } => {
            let results = RalSearch::new(&query);
            let Some(current) = results.current() else {
                println!("RAL {} not found", query.trim());
                return Ok(());
            };
            println!("{}  {}  RGB({}, {}, {})", current, current.hex, current.r, current.g, current.b);
            if results.others() > 0 {
                println!("({} more)", results.others());
                for color in results.results().iter().skip(1) {
                    println!("  {}  {}", color, color.hex);
                }
            }
        }
        RalCommand::Save { code, folder, size } => {
            let color = ral::by_code(&code)
                .or_else(|| ral::search(&code).first().copied())
                .with_context(|| format!("RAL {} not found", code))?;
            if !ral::SWATCH_SIZES.contains(&size) {
                tracing::warn!(size, "unusual swatch size");
            }
            let path = ral::save_png_to_folder(color, &folder, size)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
