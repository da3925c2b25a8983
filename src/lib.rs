pub mod importer_core;
